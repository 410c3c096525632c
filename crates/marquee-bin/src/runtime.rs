//! Fixed-rate scroll loop.
//!
//! Per iteration: wait one frame, poll one key, stop on Quit, otherwise update
//! the direction, advance the grid one step and repaint it.

use anyhow::Result;
use core_events::{FrameLimiter, RawKey};
use core_grid::ScrollBuffer;
use core_input::{KeySource, map_key};
use core_render::Renderer;
use std::fmt;
use std::io::Write;
use tracing::{info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Escape,
    CtrlC,
}

impl ShutdownReason {
    fn from_key(key: Option<RawKey>) -> Self {
        match key {
            Some(RawKey::Interrupt) => ShutdownReason::CtrlC,
            _ => ShutdownReason::Escape,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Escape => "escape",
            ShutdownReason::CtrlC => "ctrl_c",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped(ShutdownReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Break { reason: ShutdownReason },
}

pub struct MainLoop<W: Write> {
    buffer: ScrollBuffer,
    renderer: Renderer<W>,
    state: LoopState,
}

impl<W: Write> MainLoop<W> {
    pub fn new(buffer: ScrollBuffer, renderer: Renderer<W>) -> Self {
        Self {
            buffer,
            renderer,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    /// Run one iteration. Once stopped, further calls do nothing and keep
    /// returning the same `Break`.
    pub fn step<K, C>(&mut self, keys: &mut K, clock: &mut C) -> Result<LoopControl>
    where
        K: KeySource,
        C: FrameLimiter,
    {
        if let LoopState::Stopped(reason) = self.state {
            return Ok(LoopControl::Break { reason });
        }

        clock.limit();

        let key = keys.poll_key()?;
        let signal = map_key(key);
        if signal.is_quit() {
            let reason = ShutdownReason::from_key(key);
            self.state = LoopState::Stopped(reason);
            return Ok(LoopControl::Break { reason });
        }

        let direction = self.buffer.apply_signal(signal);
        self.buffer.update();
        trace!(
            target: "runtime",
            tick = self.buffer.ticks(),
            direction = direction.as_str(),
            "tick"
        );
        self.renderer.draw(self.buffer.grid())?;
        Ok(LoopControl::Continue)
    }

    /// Loop until a Quit signal arrives.
    pub fn run<K, C>(&mut self, keys: &mut K, clock: &mut C) -> Result<ShutdownReason>
    where
        K: KeySource,
        C: FrameLimiter,
    {
        let span = tracing::debug_span!(target: "runtime", "scroll_loop");
        let _enter = span.enter();
        loop {
            if let LoopControl::Break { reason } = self.step(keys, clock)? {
                let metrics = self.renderer.metrics_snapshot();
                info!(
                    target: "runtime.shutdown",
                    reason = reason.as_str(),
                    ticks = self.buffer.ticks(),
                    frames = metrics.frames,
                    last_frame_ns = metrics.last_frame_ns,
                    "loop_stopped"
                );
                return Ok(reason);
            }
        }
    }
}
