use crate::env;
use crate::logger::{Logger, DEFAULT_TIMESTAMP_FORMAT};
use crate::tracing::TracingBackend;
use std::sync::Arc;

/// Resolve a [`Logger`] by name over the default `tracing` backend.
///
/// This is the main entry point for applications that don't construct
/// backends manually. Loggers are cheap to clone and share; there is no
/// process-wide registry because the `tracing` subscriber already is one.
/// The timestamp pattern honors `JSON_LOG_TIMESTAMP_FORMAT` when set.
pub fn get_logger(name: impl Into<String>) -> Logger {
    let format = env::env_or(env::JSON_LOG_TIMESTAMP_FORMAT_ENV, DEFAULT_TIMESTAMP_FORMAT);
    Logger::new(Arc::new(TracingBackend::new(name))).with_timestamp_format(format)
}
