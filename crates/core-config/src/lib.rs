//! Runtime configuration.
//!
//! There is no configuration file and no behavior-changing flag: `Config`
//! carries the compiled-in defaults, and `ConfigContext` records what the
//! terminal looked like at startup. The recorded viewport is informational;
//! the grid is never resized or clipped to it.

use core_events::FRAME_INTERVAL;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub const LOG_FILE_NAME: &str = "marquee.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigContext {
    pub viewport_columns: u16,
    pub viewport_rows: u16,
}

impl ConfigContext {
    pub fn new(viewport_columns: u16, viewport_rows: u16) -> Self {
        Self {
            viewport_columns,
            viewport_rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub frame_interval: Duration,
    pub log_file: PathBuf,
    /// Terminal size seen at startup, once applied.
    pub viewport: Option<ConfigContext>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: FRAME_INTERVAL,
            log_file: PathBuf::from(LOG_FILE_NAME),
            viewport: None,
        }
    }
}

impl Config {
    /// Record the startup viewport against the grid dimensions. Returns whether
    /// the grid fits; an overflow is logged and otherwise ignored.
    pub fn apply_context(
        &mut self,
        ctx: ConfigContext,
        grid_cols: usize,
        grid_rows: usize,
    ) -> bool {
        let fits =
            grid_cols <= ctx.viewport_columns as usize && grid_rows <= ctx.viewport_rows as usize;
        if !fits {
            info!(
                target: "config",
                viewport_columns = ctx.viewport_columns,
                viewport_rows = ctx.viewport_rows,
                grid_cols,
                grid_rows,
                "grid_exceeds_viewport"
            );
        }
        self.viewport = Some(ctx);
        fits
    }
}
