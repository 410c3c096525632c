//! Log capture for crate tests.
//!
//! Two shapes: [`capture_events`] keeps each event's target and recorded
//! fields for structured assertions, [`capture_logs`] renders through the fmt
//! layer (no time, no ANSI) so tests can match on the printed line.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::field::{Field, Visit};
use tracing::subscriber::with_default;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    pub target: String,
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Debug rendering of a recorded field, `message` included.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct FieldRecorder(Vec<(String, String)>);

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_owned(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct EventSink {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for EventSink {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        let meta = event.metadata();
        lock(&self.events).push(CapturedEvent {
            target: meta.target().to_owned(),
            level: *meta.level(),
            fields: recorder.0,
        });
    }
}

/// Run `f` under a thread-local subscriber and return every event it emitted,
/// at any level, in order.
pub fn capture_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let sink = EventSink::default();
    let events = sink.events.clone();
    with_default(Registry::default().with(sink), f);
    lock(&events).clone()
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferGuard<'a>(MutexGuard<'a, Vec<u8>>);

impl Write for BufferGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        BufferGuard(lock(&self.0))
    }
}

/// Run `f` under a fmt subscriber capped at `max_level` and return the
/// formatted output, one line per event with its target shown.
pub fn capture_logs<F: FnOnce()>(max_level: Level, f: F) -> String {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(buffer.clone())
        .finish();
    with_default(subscriber, f);
    let bytes = lock(&buffer.0).clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

// A panicking test must not poison the capture for the assertions after it.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
