use crate::backend::Backend;
use crate::level::Level;

/// [`Backend`] that forwards rendered events into the global `tracing`
/// subscriber.
///
/// The logger name travels as a structured `logger` field because the
/// `tracing` macros require static targets. Enablement reflects whatever
/// filtering the installed subscriber applies, so disabled levels cost
/// one subscriber interest check and nothing else.
pub struct TracingBackend {
    name: String,
}

impl TracingBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Backend for TracingBackend {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Trace => ::tracing::enabled!(::tracing::Level::TRACE),
            Level::Debug => ::tracing::enabled!(::tracing::Level::DEBUG),
            Level::Info => ::tracing::enabled!(::tracing::Level::INFO),
            Level::Warn => ::tracing::enabled!(::tracing::Level::WARN),
            Level::Error => ::tracing::enabled!(::tracing::Level::ERROR),
        }
    }

    fn write(&self, level: Level, line: &str) {
        match level {
            Level::Trace => {
                ::tracing::event!(::tracing::Level::TRACE, logger = %self.name, "{}", line)
            }
            Level::Debug => {
                ::tracing::event!(::tracing::Level::DEBUG, logger = %self.name, "{}", line)
            }
            Level::Info => {
                ::tracing::event!(::tracing::Level::INFO, logger = %self.name, "{}", line)
            }
            Level::Warn => {
                ::tracing::event!(::tracing::Level::WARN, logger = %self.name, "{}", line)
            }
            Level::Error => {
                ::tracing::event!(::tracing::Level::ERROR, logger = %self.name, "{}", line)
            }
        }
    }
}
