//! Core signal types shared by the input, grid and runtime crates.
//!
//! Everything here is a closed set: a polled key decodes to a [`RawKey`], the
//! input mapper turns that into exactly one [`ProgramSignal`], and the Move
//! signals select a scroll [`Direction`].

use std::fmt;

pub mod frame;
pub use frame::{FRAME_INTERVAL, FrameClock, FrameLimiter};

/// Scroll direction applied by each grid update. Defaults to `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True when the shift moves whole rows (Up/Down) rather than columns.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded result of one input poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgramSignal {
    #[default]
    Continue,
    Quit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl ProgramSignal {
    /// Direction selected by a Move signal; `None` for `Continue` and `Quit`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            ProgramSignal::MoveUp => Some(Direction::Up),
            ProgramSignal::MoveDown => Some(Direction::Down),
            ProgramSignal::MoveLeft => Some(Direction::Left),
            ProgramSignal::MoveRight => Some(Direction::Right),
            ProgramSignal::Continue | ProgramSignal::Quit => None,
        }
    }

    pub fn is_quit(self) -> bool {
        matches!(self, ProgramSignal::Quit)
    }
}

/// ESC as delivered by terminals that report it as a plain byte.
pub const ESC_BYTE: char = '\u{1b}';

/// One key read from the terminal, reduced to what the mapper can tell apart.
/// "No key pending" is represented by `Option::<RawKey>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKey {
    Char(char),
    Esc,
    /// Ctrl+C. Raw mode suppresses SIGINT, so the terminal delivers it as a key.
    Interrupt,
    /// Any other key or terminal event (arrows, function keys, resize, ...).
    Other,
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Char(c) if c.is_control() => write!(f, "<0x{:02x}>", *c as u32),
            RawKey::Char(c) => write!(f, "{c}"),
            RawKey::Esc => f.write_str("<Esc>"),
            RawKey::Interrupt => f.write_str("<C-c>"),
            RawKey::Other => f.write_str("<other>"),
        }
    }
}
