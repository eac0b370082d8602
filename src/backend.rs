use crate::level::Level;

/// Leveled destination for rendered log events.
///
/// Implementations front a concrete logging system (`tracing`, the `log`
/// facade, a test capture, etc). The builder calls `enabled` once per
/// commit and `write` at most once; both are synchronous, and anything an
/// implementation panics with propagates to the caller unchanged.
///
/// Thread-safety of interleaved `write` calls from concurrent commits is
/// the implementation's concern, not the builder's.
pub trait Backend: Send + Sync {
    /// Whether the underlying logger currently accepts events at `level`.
    ///
    /// A `false` answer short-circuits the whole commit: no field
    /// evaluation (deferred suppliers included), no serialization, no
    /// `write`.
    fn enabled(&self, level: Level) -> bool;

    /// Emit one rendered single-line JSON event at `level`.
    fn write(&self, level: Level, line: &str);
}
