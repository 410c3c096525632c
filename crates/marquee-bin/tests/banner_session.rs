// Integration-adjacent test: run the banner through `MainLoop` with a scripted
// key source and a non-sleeping frame limiter, without a terminal.

use anyhow::Result;
use core_events::{Direction, FrameLimiter, RawKey};
use core_grid::ScrollBuffer;
use core_input::KeySource;
use core_render::Renderer;
use marquee::{LoopState, MainLoop, ShutdownReason};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Trace = Rc<RefCell<Vec<&'static str>>>;

/// Replays keys in order, then ESC so every session terminates.
struct ScriptedKeys {
    keys: VecDeque<Option<RawKey>>,
    trace: Trace,
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Result<Option<RawKey>> {
        self.trace.borrow_mut().push("poll");
        Ok(self.keys.pop_front().unwrap_or(Some(RawKey::Esc)))
    }
}

struct TracingClock {
    trace: Trace,
}

impl FrameLimiter for TracingClock {
    fn limit(&mut self) {
        self.trace.borrow_mut().push("limit");
    }
}

struct Session {
    main_loop: MainLoop<Vec<u8>>,
    reason: ShutdownReason,
    trace: Vec<&'static str>,
}

fn session(keys: &[Option<RawKey>]) -> Session {
    let trace: Trace = Rc::default();
    let mut source = ScriptedKeys {
        keys: keys.iter().copied().collect(),
        trace: trace.clone(),
    };
    let mut clock = TracingClock {
        trace: trace.clone(),
    };
    let buffer = ScrollBuffer::with_banner().unwrap();
    let mut main_loop = MainLoop::new(buffer, Renderer::new(Vec::<u8>::new()));
    let reason = main_loop.run(&mut source, &mut clock).unwrap();
    let trace = trace.borrow().clone();
    Session {
        main_loop,
        reason,
        trace,
    }
}

#[test]
fn banner_wraps_back_after_full_width_of_frames() {
    let original = ScrollBuffer::with_banner().unwrap();
    let cols = original.grid().cols();
    let s = session(&vec![None; cols]);
    assert_eq!(s.reason, ShutdownReason::Escape);
    assert_eq!(s.main_loop.buffer().grid(), original.grid());
    assert_eq!(s.main_loop.renderer().metrics_snapshot().frames, cols as u64);
}

#[test]
fn frame_wait_precedes_every_poll() {
    let s = session(&[None, Some(RawKey::Char('w'))]);
    // two running frames plus the quitting frame
    assert_eq!(
        s.trace,
        ["limit", "poll", "limit", "poll", "limit", "poll"]
    );
}

#[test]
fn drawn_frame_shows_grid_after_update() {
    let s = session(&[None]);
    let out = String::from_utf8(s.main_loop.renderer().sink().clone()).unwrap();

    let mut expected = ScrollBuffer::with_banner().unwrap();
    expected.update();
    let first_row = expected.grid().to_strings().remove(0);
    let second_row: String = expected.grid().row(1).iter().collect();
    assert!(out.starts_with(&format!("\x1b[1;1H{first_row}\x1b[2;1H{second_row}")));
    assert_eq!(s.main_loop.buffer().ticks(), 1);
}

#[test]
fn steering_changes_axis_mid_session() {
    let mut keys = vec![Some(RawKey::Char('s'))];
    keys.extend(std::iter::repeat_n(None, 22));
    keys.push(Some(RawKey::Char('a')));
    let s = session(&keys);
    assert_eq!(s.main_loop.buffer().direction(), Direction::Left);

    // 23 downward steps on a 23-row banner is a full cycle; one left step remains
    let mut expected = ScrollBuffer::with_banner().unwrap();
    expected.set_direction(Direction::Left);
    expected.update();
    assert_eq!(
        s.main_loop.buffer().grid().to_strings(),
        expected.grid().to_strings()
    );
}

#[test]
fn escape_ends_session_before_drawing() {
    let s = session(&[Some(RawKey::Esc), Some(RawKey::Char('d'))]);
    assert_eq!(s.main_loop.state(), LoopState::Stopped(ShutdownReason::Escape));
    assert_eq!(s.main_loop.buffer().ticks(), 0);
    assert!(s.main_loop.renderer().sink().is_empty());
    assert_eq!(s.trace, ["limit", "poll"]);
}

#[test]
fn ctrl_c_reports_its_own_reason() {
    let s = session(&[None, Some(RawKey::Interrupt)]);
    assert_eq!(s.reason, ShutdownReason::CtrlC);
    assert_eq!(s.main_loop.buffer().ticks(), 1);
}

#[test]
fn rows_keep_width_in_every_frame() {
    let keys: Vec<_> = "wasdwasdxyz".chars().map(|c| Some(RawKey::Char(c))).collect();
    let s = session(&keys);
    let grid = s.main_loop.buffer().grid();
    assert!(grid.iter_rows().all(|r| r.len() == grid.cols()));
    let snap = s.main_loop.renderer().metrics_snapshot();
    assert_eq!(
        snap.text_bytes,
        (grid.rows() * grid.cols() * keys.len()) as u64
    );
}
