use crate::backend::Backend;
use crate::level::Level;

fn to_log_level(level: Level) -> ::log::Level {
    match level {
        Level::Trace => ::log::Level::Trace,
        Level::Debug => ::log::Level::Debug,
        Level::Info => ::log::Level::Info,
        Level::Warn => ::log::Level::Warn,
        Level::Error => ::log::Level::Error,
    }
}

/// [`Backend`] over the `log` facade.
///
/// The logger name becomes the dynamic `target`, so module-path style
/// filtering in `env_logger`-like consumers applies to it directly.
pub struct LogBackend {
    name: String,
}

impl LogBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Backend for LogBackend {
    fn enabled(&self, level: Level) -> bool {
        ::log::log_enabled!(target: self.name.as_str(), to_log_level(level))
    }

    fn write(&self, level: Level, line: &str) {
        ::log::log!(target: self.name.as_str(), to_log_level(level), "{}", line);
    }
}
