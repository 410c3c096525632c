//! Scrolling character grid.
//!
//! [`Grid`] is the fixed rectangular buffer; [`ScrollBuffer`] owns one plus the
//! active [`core_events::Direction`] and applies one wrap-around shift per tick.

pub mod grid;
pub mod pattern;
pub mod scroll;

pub use grid::{Grid, GridError};
pub use pattern::{BANNER, BANNER_COLS, BANNER_ROWS};
pub use scroll::ScrollBuffer;
