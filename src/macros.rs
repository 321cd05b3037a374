//! Logging macros for variadic call sites.
//!
//! The level methods on [`Logger`](crate::Logger) take a single message;
//! these macros accept any number of displayable arguments (including none)
//! and forward them as the call's argument list, where the configured
//! message formatter merges them with the resolved prefixes.
//!
//! # Examples
//!
//! ```
//! use level_logger::prelude::*;
//! use level_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Single message
//! info!(logger, "Server started");
//!
//! // Multiple arguments, space-joined by the default formatter
//! info!(logger, "listening on", 8080);
//!
//! // No arguments: emits the resolved prefixes alone
//! info!(logger);
//! ```

/// Log displayable arguments at an explicit level.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new();
/// use level_logger::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr) => {
        $logger.log($level, &[])
    };
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log trace-level arguments.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::builder().level(LevelFilter::Trace).build();
/// use level_logger::trace;
/// trace!(logger, "entering handler");
/// trace!(logger, "request id:", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace $(, $arg)*)
    };
}

/// Log debug-level arguments.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::builder().level(LevelFilter::Debug).build();
/// use level_logger::debug;
/// debug!(logger, "cache size:", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}

/// Log info-level arguments.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new();
/// use level_logger::info;
/// info!(logger, "application started");
/// info!(logger, "processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

/// Log warn-level arguments.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new();
/// use level_logger::warn;
/// warn!(logger, "low disk space");
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $arg)*)
    };
}

/// Log error-level arguments.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new();
/// use level_logger::error;
/// error!(logger, "failed to connect:", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LevelFilter, LogLevel, Logger, Sink};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CaptureSink {
        lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
    }

    impl Sink for CaptureSink {
        fn emit(&self, level: LogLevel, line: &str) {
            self.lines.lock().push((level, line.to_string()));
        }
    }

    #[test]
    fn test_log_macro() {
        let sink = CaptureSink::default();
        let logger = Logger::builder().sink(sink.clone()).build();
        log!(logger, LogLevel::Info, "value:", 42);
        assert_eq!(sink.lines.lock()[0].1, "value: 42");
    }

    #[test]
    fn test_level_macros() {
        let sink = CaptureSink::default();
        let logger = Logger::builder()
            .level(LevelFilter::Trace)
            .sink(sink.clone())
            .build();
        trace!(logger, "t");
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e");
        assert_eq!(sink.lines.lock().len(), 5);
    }

    #[test]
    fn test_empty_call() {
        let sink = CaptureSink::default();
        let logger = Logger::builder().sink(sink.clone()).build();
        info!(logger);
        assert_eq!(sink.lines.lock()[0].1, "");
    }

    #[test]
    fn test_trailing_comma() {
        let sink = CaptureSink::default();
        let logger = Logger::builder().sink(sink.clone()).build();
        info!(logger, "a", "b",);
        assert_eq!(sink.lines.lock()[0].1, "a b");
    }
}
