use crate::backend::Backend;
use crate::level::Level;

/// A backend that reports every level disabled and drops anything written.
///
/// Useful for measuring the overhead of the builder itself without any
/// dispatch, and for tests that only exercise the disabled path.
#[derive(Clone, Default)]
pub struct NoopBackend;

impl Backend for NoopBackend {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn write(&self, _level: Level, _line: &str) {}
}
