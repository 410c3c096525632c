//! Keyboard polling and the key → signal mapping.
//!
//! The runtime reads at most one terminal event per frame through a
//! [`KeySource`] and hands the decoded key to [`map_key`].

use anyhow::Result;
use core_events::{ESC_BYTE, ProgramSignal, RawKey};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind,
    KeyModifiers as CMods,
};
use std::time::Duration;

/// Translate one polled key into a program signal.
///
/// Total over its input: `w`/`a`/`s`/`d` move, ESC (either form) and Ctrl+C
/// quit, and every other key as well as "no key" continue.
pub fn map_key(key: Option<RawKey>) -> ProgramSignal {
    match key {
        Some(RawKey::Char('w')) => ProgramSignal::MoveUp,
        Some(RawKey::Char('a')) => ProgramSignal::MoveLeft,
        Some(RawKey::Char('s')) => ProgramSignal::MoveDown,
        Some(RawKey::Char('d')) => ProgramSignal::MoveRight,
        Some(RawKey::Char(ESC_BYTE)) | Some(RawKey::Esc) => ProgramSignal::Quit,
        Some(RawKey::Interrupt) => ProgramSignal::Quit,
        Some(RawKey::Char(_)) | Some(RawKey::Other) | None => ProgramSignal::Continue,
    }
}

/// Non-blocking source of keys. `poll_key` must return immediately.
pub trait KeySource {
    fn poll_key(&mut self) -> Result<Option<RawKey>>;
}

/// Reads from the controlling terminal via crossterm. Requires raw mode to
/// deliver single keystrokes.
#[derive(Debug, Default)]
pub struct CrosstermKeySource {
    polled: u64,
    decoded: u64,
}

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// (polls issued, keys decoded)
    pub fn counters(&self) -> (u64, u64) {
        (self.polled, self.decoded)
    }
}

impl KeySource for CrosstermKeySource {
    fn poll_key(&mut self) -> Result<Option<RawKey>> {
        self.polled += 1;
        if !crossterm::event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let key = decode_event(&crossterm::event::read()?);
        if let Some(key) = key {
            self.decoded += 1;
            log_key_decoded(key);
        }
        Ok(key)
    }
}

/// Reduce a crossterm event to a [`RawKey`]. Key releases are dropped (they
/// only appear on platforms that report them) so one keystroke is one key.
pub fn decode_event(event: &CEvent) -> Option<RawKey> {
    match event {
        CEvent::Key(key) => decode_key(key),
        _ => Some(RawKey::Other),
    }
}

fn decode_key(key: &CKeyEvent) -> Option<RawKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(CMods::CONTROL) {
        return Some(match key.code {
            CKeyCode::Char('c') | CKeyCode::Char('C') => RawKey::Interrupt,
            _ => RawKey::Other,
        });
    }
    Some(match key.code {
        CKeyCode::Char(c) => RawKey::Char(c),
        CKeyCode::Esc => RawKey::Esc,
        _ => RawKey::Other,
    })
}

#[inline]
fn log_key_decoded(key: RawKey) {
    tracing::trace!(target: "input", key = %key, "key_decoded");
}
