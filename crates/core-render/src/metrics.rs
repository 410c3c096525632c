//! Render counters.
//!
//! Atomics so a snapshot can be taken through `&self`; the renderer itself is
//! only ever driven from the main loop thread.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RenderMetrics {
    /// Full repaints executed (every frame is a full repaint).
    pub frames: AtomicU64,
    /// Rows written across all frames.
    pub rows_printed: AtomicU64,
    /// Bytes of row text written, excluding escape sequences.
    pub text_bytes: AtomicU64,
    /// Duration (ns) of the most recent frame, including the flush.
    pub last_frame_ns: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderMetricsSnapshot {
    pub frames: u64,
    pub rows_printed: u64,
    pub text_bytes: u64,
    pub last_frame_ns: u64,
}

impl RenderMetrics {
    pub fn record_frame(&self, rows: u64, text_bytes: u64, ns: u64) {
        self.frames.fetch_add(1, Ordering::Relaxed);
        self.rows_printed.fetch_add(rows, Ordering::Relaxed);
        self.text_bytes.fetch_add(text_bytes, Ordering::Relaxed);
        self.last_frame_ns.store(ns, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RenderMetricsSnapshot {
        RenderMetricsSnapshot {
            frames: self.frames.load(Ordering::Relaxed),
            rows_printed: self.rows_printed.load(Ordering::Relaxed),
            text_bytes: self.text_bytes.load(Ordering::Relaxed),
            last_frame_ns: self.last_frame_ns.load(Ordering::Relaxed),
        }
    }
}
