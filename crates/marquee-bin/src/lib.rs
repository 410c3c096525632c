//! Library side of the marquee binary: the fixed-rate scroll loop.

pub mod runtime;

pub use runtime::{LoopControl, LoopState, MainLoop, ShutdownReason};
