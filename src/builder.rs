use crate::backend::Backend;
use crate::json;
use crate::level::Level;
use crate::record::FieldValue;
use chrono::Local;
use std::collections::BTreeMap;
use std::sync::Arc;

const TIMESTAMP_KEY: &str = "timestamp";
const LEVEL_KEY: &str = "level";
const CATEGORY_KEY: &str = "category";
const MESSAGE_KEY: &str = "message";

/// A stored contribution: either a ready value or a supplier that must not
/// run unless the level turns out to be enabled.
enum Slot {
    Value(FieldValue),
    Deferred(Box<dyn FnOnce() -> String + Send>),
}

/// Single-use, fluent accumulator for one log event.
///
/// Obtained level-scoped from a [`Logger`](crate::logger::Logger), mutated
/// through chained calls on the calling thread, and consumed by [`log`].
/// Field insertion order is preserved; writing an existing key again
/// overwrites the value in place, keeping the key's first-seen position.
///
/// [`log`]: EventBuilder::log
pub struct EventBuilder {
    backend: Arc<dyn Backend>,
    timestamp_format: Arc<str>,
    level: Level,
    fields: Vec<(String, Slot)>,
}

impl EventBuilder {
    pub(crate) fn new(backend: Arc<dyn Backend>, timestamp_format: Arc<str>, level: Level) -> Self {
        Self {
            backend,
            timestamp_format,
            level,
            fields: Vec::new(),
        }
    }

    fn insert(&mut self, name: String, slot: Slot) {
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = slot,
            None => self.fields.push((name, slot)),
        }
    }

    /// Store `value` under the reserved `"category"` key.
    #[must_use]
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.insert(
            CATEGORY_KEY.to_string(),
            Slot::Value(FieldValue::Str(value.into())),
        );
        self
    }

    /// Deferred variant of [`category`](EventBuilder::category): the
    /// supplier runs at most once, at commit time, and only if the level
    /// is enabled.
    #[must_use]
    pub fn category_with<F>(mut self, supplier: F) -> Self
    where
        F: FnOnce() -> String + Send + 'static,
    {
        self.insert(CATEGORY_KEY.to_string(), Slot::Deferred(Box::new(supplier)));
        self
    }

    /// Store `value` under the reserved `"message"` key.
    #[must_use]
    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.insert(
            MESSAGE_KEY.to_string(),
            Slot::Value(FieldValue::Str(value.into())),
        );
        self
    }

    /// Store a string field under `name`.
    ///
    /// Any name is accepted, including the reserved ones: writing to
    /// `"category"` here overwrites what an earlier
    /// [`category`](EventBuilder::category) call stored, intentionally.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name.into(), Slot::Value(FieldValue::Str(value.into())));
        self
    }

    /// Store a list-typed field under `name`, keeping the given order.
    #[must_use]
    pub fn list<I, T>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.insert(name.into(), Slot::Value(FieldValue::List(values)));
        self
    }

    /// Store a map-typed field under `name`.
    #[must_use]
    pub fn map<I, K, V>(mut self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.insert(name.into(), Slot::Value(FieldValue::Map(entries)));
        self
    }

    /// Commit the event.
    ///
    /// Asks the backend whether the level is enabled first; if not, all
    /// accumulated state is discarded without evaluating anything, and the
    /// backend's write is never called. If enabled, deferred suppliers are
    /// resolved (each exactly once), `timestamp` and `level` are injected
    /// as the first two keys (superseding caller-supplied fields of those
    /// names), and the rendered line is handed to the backend in a single
    /// call at this builder's level.
    ///
    /// Consuming `self` makes builders single-use: a second commit cannot
    /// be expressed.
    pub fn log(self) {
        if !self.backend.enabled(self.level) {
            return;
        }

        let timestamp = Local::now().format(&self.timestamp_format).to_string();

        let mut resolved: Vec<(String, FieldValue)> = Vec::with_capacity(self.fields.len() + 2);
        resolved.push((TIMESTAMP_KEY.to_string(), FieldValue::Str(timestamp)));
        resolved.push((
            LEVEL_KEY.to_string(),
            FieldValue::Str(self.level.as_str().to_string()),
        ));

        for (name, slot) in self.fields {
            // Injected keys take final precedence over caller-supplied ones.
            if name == TIMESTAMP_KEY || name == LEVEL_KEY {
                continue;
            }
            let value = match slot {
                Slot::Value(value) => value,
                Slot::Deferred(supplier) => FieldValue::Str(supplier()),
            };
            resolved.push((name, value));
        }

        let line = json::render(&resolved);
        self.backend.write(self.level, &line);
    }
}
