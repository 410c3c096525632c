//! Grid renderer.
//!
//! Every frame is a full repaint: for each grid row, move to `(0, row)` and
//! print the row text. There is no diffing and no clearing; rows have fixed
//! width so each frame overwrites the previous one exactly.

use anyhow::Result;
use core_grid::Grid;
use std::io::{Stdout, Write, stdout};
use std::time::Instant;

pub mod metrics;
pub mod writer;

pub use metrics::{RenderMetrics, RenderMetricsSnapshot};
use writer::Writer;

pub struct Renderer<W: Write> {
    out: W,
    metrics: RenderMetrics,
}

impl Renderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            metrics: RenderMetrics::default(),
        }
    }

    /// Build the frame's command list without emitting it.
    pub fn frame_commands(&self, grid: &Grid) -> Writer {
        let mut w = Writer::with_capacity(grid.rows() * 2);
        for (y, row) in grid.iter_rows().enumerate() {
            // rows beyond u16::MAX cannot be addressed by the terminal
            let Ok(y) = u16::try_from(y) else { break };
            w.move_to(0, y);
            w.print(row.iter().collect::<String>());
        }
        w
    }

    /// Write every row of `grid` at its vertical position, top to bottom.
    pub fn draw(&mut self, grid: &Grid) -> Result<()> {
        let span =
            tracing::trace_span!(target: "render", "draw", rows = grid.rows(), cols = grid.cols());
        let _e = span.enter();
        let start = Instant::now();
        let w = self.frame_commands(grid);
        let text_bytes: usize = w
            .commands()
            .iter()
            .map(|c| match c {
                writer::Command::Print(s) => s.len(),
                writer::Command::MoveTo(..) => 0,
            })
            .sum();
        w.flush_to(&mut self.out)?;
        self.metrics.record_frame(
            grid.rows() as u64,
            text_bytes as u64,
            start.elapsed().as_nanos() as u64,
        );
        Ok(())
    }

    pub fn metrics_snapshot(&self) -> RenderMetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn sink(&self) -> &W {
        &self.out
    }

    pub fn into_sink(self) -> W {
        self.out
    }
}
