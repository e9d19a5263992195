//! Writing errors as tracing events.

use lineage_error::{Code, CodedError, Projection, Wrapped, projection_of};
use serde_json::Value;
use std::error::Error;
use tracing::Level;

/// `tracing::event!` needs a constant level; dispatch on the runtime one.
macro_rules! event_at {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            Level::ERROR => tracing::event!(Level::ERROR, $($fields)+),
            Level::WARN => tracing::event!(Level::WARN, $($fields)+),
            Level::INFO => tracing::event!(Level::INFO, $($fields)+),
            Level::DEBUG => tracing::event!(Level::DEBUG, $($fields)+),
            _ => tracing::event!(Level::TRACE, $($fields)+),
        }
    };
}

/// Event field values for one projection. Empty parts are `None` and left
/// off the event.
struct Fields {
    data: Option<String>,
    tags: Option<String>,
    wrapped: Option<String>,
    stack: Option<String>,
    projection: String,
}

impl Fields {
    fn new(projection: &Projection) -> Self {
        let data = (!projection.data.is_empty())
            .then(|| Value::Object(projection.data.clone()).to_string());
        let tags = (!projection.tags.is_empty())
            .then(|| Value::from(projection.tags.clone()).to_string());
        let wrapped = projection.wrapped.as_ref().map(|wrapped| match wrapped {
            Wrapped::Node(node) => node.to_json().to_string(),
            Wrapped::Message(message) => message.clone(),
        });

        Self {
            data,
            tags,
            wrapped,
            stack: projection.stack.clone(),
            projection: projection.to_json().to_string(),
        }
    }
}

fn emit_projection(level: Level, projection: &Projection) {
    let fields = Fields::new(projection);
    event_at!(
        level,
        code = %projection.code,
        error = %projection.message,
        data = fields.data.as_deref(),
        tags = fields.tags.as_deref(),
        wrapped = fields.wrapped.as_deref(),
        stack = fields.stack.as_deref(),
        projection = %fields.projection,
        "Error recorded"
    );
}

/// Log a coded error as one structured event.
pub trait ErrorLogExt {
    /// Emit this error at `level`.
    fn log_at(&self, level: Level);

    /// Emit this error at `ERROR`.
    fn log(&self) {
        self.log_at(Level::ERROR);
    }
}

impl<C: Code> ErrorLogExt for CodedError<C> {
    fn log_at(&self, level: Level) {
        emit_projection(level, &self.projection());
    }
}

/// Log any error at `level`.
///
/// Errors that render a projection (every `CodedError`, plus types passed to
/// [`register_projection`](lineage_error::register_projection)) get the full
/// field set. Anything else is logged with its message only.
pub fn log_error(level: Level, err: &(dyn Error + 'static)) {
    match projection_of(err) {
        Some(projection) => emit_projection(level, &projection),
        None => event_at!(level, error = %err, "Error recorded"),
    }
}
