//! Capturing tracing events in tests.
//!
//! [`capture_logs`] installs a thread-scoped subscriber that records every
//! event, so assertions can check what an error logged.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// A recorded tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// The event's level
    pub level: Level,
    /// The event's target
    pub target: String,
    /// The `message` field
    pub message: String,
    /// All other fields, in recording order
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Value of the named field, if recorded.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Shared store of captured events.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedLogs {
    /// All events captured so far.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().clone()
    }

    /// Number of events at `level`.
    pub fn count_at_level(&self, level: Level) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| event.level == level)
            .count()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

struct CaptureLayer {
    logs: CapturedLogs,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn push(&mut self, field: &tracing::field::Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_owned(), value));
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field, value.to_owned());
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.logs.events.lock().push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Capture every event on the current thread until the guard is dropped.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let layer = CaptureLayer { logs: logs.clone() };

    let guard = tracing_subscriber::registry()
        .with(layer)
        .with(LevelFilter::TRACE)
        .set_default();
    (logs, guard)
}
