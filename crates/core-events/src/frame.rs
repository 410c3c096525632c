//! Fixed frame pacing.
//!
//! Each call to [`FrameLimiter::limit`] blocks for the full interval. There is
//! no drift correction: time spent updating and drawing is not subtracted, so
//! the loop runs somewhat slower than `1 / interval`.

use std::time::Duration;

/// Delay between loop iterations (roughly 8.3 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Something that paces the main loop. Tests substitute a no-op.
pub trait FrameLimiter {
    fn limit(&mut self);
}

/// Sleeping limiter used by the binary.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of completed `limit` calls.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameLimiter for FrameClock {
    fn limit(&mut self) {
        std::thread::sleep(self.interval);
        self.frames += 1;
        tracing::trace!(target: "runtime.frame", frame = self.frames, "frame_limit");
    }
}
