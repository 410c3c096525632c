//! Terminal backend abstraction and crossterm implementation.
//!
//! Entering the terminal switches to raw mode, hides the cursor and clears the
//! screen; leaving shows the cursor and restores cooked mode. No alternate
//! screen is used, so the last frame stays visible after exit.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{Write, stdout};

pub mod size;
pub use size::{FALLBACK_SIZE, TerminalSize};

/// Show the cursor on `out` and return to cooked mode. Safe to call when raw
/// mode was never enabled; used by `leave` and by the panic hook, which cannot
/// reach the backend.
pub fn restore_to<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, Show)?;
    disable_raw_mode()?;
    Ok(())
}

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            execute!(stdout(), Hide, Clear(ClearType::All))?;
            enable_raw_mode()?;
            self.entered = true;
            tracing::debug!(target: "terminal", "entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            restore_to(&mut stdout())?;
            self.entered = false;
            tracing::debug!(target: "terminal", "left");
        }
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl TerminalGuard<'_> {
    /// Leave now and report failures instead of swallowing them in `Drop`.
    pub fn release(mut self) -> Result<()> {
        self.active = false;
        self.backend.leave()
    }
}

impl<'a> Drop for TerminalGuard<'a> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}
