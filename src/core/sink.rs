//! Sink trait for final log line emission

use super::log_level::LogLevel;

/// Final consumer of a formatted log line.
///
/// A sink receives exactly `(level, line)` once per call that passes the
/// threshold; the logger never re-formats or re-emits. Emission takes
/// `&self`, so stateful sinks use interior mutability. Implemented for any
/// `Fn(LogLevel, &str)` closure, so an injected closure is a sink.
pub trait Sink: Send + Sync {
    fn emit(&self, level: LogLevel, line: &str);
}

impl<F> Sink for F
where
    F: Fn(LogLevel, &str) + Send + Sync,
{
    fn emit(&self, level: LogLevel, line: &str) {
        self(level, line)
    }
}
