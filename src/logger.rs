use crate::backend::Backend;
use crate::builder::EventBuilder;
use crate::level::Level;
use chrono::format::{Item, StrftimeItems};
use std::sync::Arc;

/// Default `chrono` pattern for the `timestamp` field: local date-time with
/// millisecond precision and a numeric offset, e.g.
/// `2016-04-01 14:37:02.123+0200`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f%z";

/// Hands out one level-scoped [`EventBuilder`] per log call.
///
/// Cheap to clone and safe to share across threads; each builder is
/// single-use and lives entirely on the thread that obtained it.
/// Interleaving of writes from concurrent commits is the backend's
/// concern.
#[derive(Clone)]
pub struct Logger {
    backend: Arc<dyn Backend>,
    timestamp_format: Arc<str>,
}

impl Logger {
    /// Wrap a backend with the default timestamp pattern.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
        }
    }

    /// Override the `chrono` pattern used to format the `timestamp` field.
    ///
    /// The pattern is checked here, once; one with unknown specifiers would
    /// otherwise panic inside every enabled commit. Invalid patterns are
    /// discarded and the current pattern (initially
    /// [`DEFAULT_TIMESTAMP_FORMAT`]) stays in effect.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<Arc<str>>) -> Self {
        let format = format.into();
        if pattern_is_valid(&format) {
            self.timestamp_format = format;
        }
        self
    }

    /// A fresh builder scoped to `level`.
    pub fn level(&self, level: Level) -> EventBuilder {
        EventBuilder::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.timestamp_format),
            level,
        )
    }

    pub fn trace(&self) -> EventBuilder {
        self.level(Level::Trace)
    }

    pub fn debug(&self) -> EventBuilder {
        self.level(Level::Debug)
    }

    pub fn info(&self) -> EventBuilder {
        self.level(Level::Info)
    }

    pub fn warn(&self) -> EventBuilder {
        self.level(Level::Warn)
    }

    pub fn error(&self) -> EventBuilder {
        self.level(Level::Error)
    }
}

/// A pattern is usable when `chrono` parses every item; `Item::Error`
/// entries panic at render time.
fn pattern_is_valid(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
