//! Startup terminal size probe.
//!
//! The size is recorded and logged but never used to resize or clip the grid;
//! the grid keeps its construction-time dimensions for the whole run.

/// Used when the size query fails (not a tty, unsupported platform).
pub const FALLBACK_SIZE: TerminalSize = TerminalSize {
    columns: 80,
    rows: 24,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalSize {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Query the current size, falling back to [`FALLBACK_SIZE`].
    pub fn query() -> Self {
        match crossterm::terminal::size() {
            Ok((columns, rows)) => Self::new(columns, rows),
            Err(err) => {
                tracing::warn!(target: "terminal", ?err, "size_query_failed");
                FALLBACK_SIZE
            }
        }
    }
}
