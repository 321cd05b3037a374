//! Logger core: configuration resolution and per-level dispatch
//!
//! Construction resolves the options into five pre-bound level functions,
//! one per severity. A level below the threshold binds to a shared no-op; an
//! enabled level binds to a closure holding a snapshot of the prefixes and
//! strategies. Reconfiguration rebuilds all five functions in one pass and
//! replaces the table atomically, so a closure bound earlier keeps exactly
//! the configuration it captured.

use super::{
    error::Result,
    format::{MessageFormatter, TextFormat},
    log_level::{LevelFilter, LogLevel},
    prefix::{self, Prefix},
    sink::Sink,
    timestamp::{TimestampFormat, TimestampFormatter},
};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::fmt::Display;
use std::sync::Arc;

type LevelFn = Arc<dyn Fn(&[&dyn Display]) + Send + Sync>;

#[derive(Clone)]
struct LoggerConfig {
    threshold: LevelFilter,
    prefixes: Vec<Prefix>,
    timestamps: Arc<dyn TimestampFormatter>,
    formatter: Arc<dyn MessageFormatter>,
    sink: Arc<dyn Sink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: LevelFilter::default(),
            prefixes: Vec::new(),
            timestamps: Arc::new(TimestampFormat::default()),
            formatter: Arc::new(TextFormat),
            sink: Arc::new(ConsoleSink::new()),
        }
    }
}

struct Dispatch {
    config: LoggerConfig,
    bound: [LevelFn; LogLevel::COUNT],
}

fn noop() -> LevelFn {
    Arc::new(|_args: &[&dyn Display]| {})
}

/// Bind one active level function over a snapshot of the configuration.
///
/// Arguments are rendered and prefixes resolved only here, so a suppressed
/// level never pays for either.
fn bind(config: &LoggerConfig, level: LogLevel) -> LevelFn {
    let prefixes = config.prefixes.clone();
    let timestamps = Arc::clone(&config.timestamps);
    let formatter = Arc::clone(&config.formatter);
    let sink = Arc::clone(&config.sink);
    Arc::new(move |args: &[&dyn Display]| {
        let resolved = prefix::resolve(&prefixes, level, timestamps.as_ref());
        let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let line = formatter.format(level, &resolved, &rendered);
        sink.emit(level, &line);
    })
}

fn rebuild(config: &LoggerConfig) -> [LevelFn; LogLevel::COUNT] {
    let suppressed = noop();
    LogLevel::ALL.map(|level| {
        if config.threshold.enabled(level) {
            bind(config, level)
        } else {
            Arc::clone(&suppressed)
        }
    })
}

/// Leveled logger with pre-bound per-level dispatch.
///
/// # Example
/// ```
/// use level_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LevelFilter::Debug)
///     .prefixes([Prefix::Timestamp, Prefix::SeverityLabel])
///     .build();
///
/// logger.debug("cache warmed");
/// logger.trace("not emitted");
/// ```
pub struct Logger {
    dispatch: RwLock<Dispatch>,
}

impl Logger {
    /// Create a logger with all options defaulted: threshold `Info`, no
    /// prefixes, simple local timestamps, text formatting, console sink.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use level_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LevelFilter::Warn)
    ///     .prefix("api")
    ///     .build();
    /// # logger.warn("degraded");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Dispatch `args` at `level` through the pre-bound level function.
    ///
    /// Exactly one sink invocation if `level` passes the threshold, zero
    /// otherwise. The `trace!`..`error!` macros are the variadic front end
    /// for this method.
    pub fn log(&self, level: LogLevel, args: &[&dyn Display]) {
        // Clone out the bound function so resolution, formatting, and
        // emission run outside the lock; a sink may log through another
        // logger.
        let bound = Arc::clone(&self.dispatch.read().bound[level.index()]);
        bound(args);
    }

    #[inline]
    pub fn trace(&self, message: impl Display) {
        self.log(LogLevel::Trace, &[&message]);
    }

    #[inline]
    pub fn debug(&self, message: impl Display) {
        self.log(LogLevel::Debug, &[&message]);
    }

    #[inline]
    pub fn info(&self, message: impl Display) {
        self.log(LogLevel::Info, &[&message]);
    }

    #[inline]
    pub fn warn(&self, message: impl Display) {
        self.log(LogLevel::Warn, &[&message]);
    }

    #[inline]
    pub fn error(&self, message: impl Display) {
        self.log(LogLevel::Error, &[&message]);
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        self.dispatch.read().config.threshold
    }

    /// Replace the threshold and rebuild all five level functions.
    ///
    /// Calls completed before the change are unaffected; only subsequent
    /// calls observe the new threshold.
    pub fn set_level(&self, level: LevelFilter) {
        let mut dispatch = self.dispatch.write();
        dispatch.config.threshold = level;
        let bound = rebuild(&dispatch.config);
        dispatch.bound = bound;
    }

    /// Lenient free-form level setter: unrecognized text leaves the
    /// threshold unchanged. Matching is case-insensitive; `"off"` and
    /// `"disabled"` select the off sentinel.
    pub fn set_level_text(&self, text: &str) {
        if let Ok(level) = text.parse::<LevelFilter>() {
            self.set_level(level);
        }
    }

    /// Strict free-form level setter: unrecognized text fails with
    /// [`LoggerError::InvalidLevel`](super::LoggerError::InvalidLevel) and
    /// the threshold is retained.
    pub fn try_set_level_text(&self, text: &str) -> Result<()> {
        self.set_level(text.parse::<LevelFilter>()?);
        Ok(())
    }

    /// Current prefix sequence as an independent copy; mutating the returned
    /// vector does not affect the logger.
    #[must_use]
    pub fn prefixes(&self) -> Vec<Prefix> {
        self.dispatch.read().config.prefixes.clone()
    }

    /// Replace the prefix sequence wholesale and rebuild all five level
    /// functions.
    pub fn set_prefixes(&self, prefixes: Vec<Prefix>) {
        let mut dispatch = self.dispatch.write();
        dispatch.config.prefixes = prefixes;
        let bound = rebuild(&dispatch.config);
        dispatch.bound = bound;
    }

    /// Derive a builder seeded with a snapshot of this logger's current
    /// configuration. Overridden fields replace the inherited values (a new
    /// prefix sequence replaces, never appends); `build()` yields an
    /// independent logger, and later mutation of either logger does not
    /// affect the other.
    ///
    /// # Example
    /// ```
    /// use level_logger::prelude::*;
    ///
    /// let base = Logger::builder().level(LevelFilter::Warn).build();
    /// let child = base.extend().prefixes(["worker"]).build();
    /// assert_eq!(child.level(), LevelFilter::Warn);
    /// assert!(base.prefixes().is_empty());
    /// ```
    #[must_use]
    pub fn extend(&self) -> LoggerBuilder {
        LoggerBuilder {
            config: self.dispatch.read().config.clone(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// All fields are optional and defaulted; `build()` resolves the
/// configuration into the bound level functions in a single pass.
///
/// # Example
/// ```
/// use level_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level_text("debug")
///     .prefixes([Prefix::Timestamp, Prefix::from("gateway")])
///     .sink(ConsoleSink::with_colors(false))
///     .build();
/// # logger.debug("up");
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.config.threshold = level;
        self
    }

    /// Set the threshold from free-form text. Lenient: unrecognized text
    /// keeps the current value.
    #[must_use = "builder methods return a new value"]
    pub fn level_text(mut self, text: &str) -> Self {
        if let Ok(level) = text.parse::<LevelFilter>() {
            self.config.threshold = level;
        }
        self
    }

    /// Replace the prefix sequence
    #[must_use = "builder methods return a new value"]
    pub fn prefixes<I>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Prefix>,
    {
        self.config.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Append one prefix to the sequence
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.config.prefixes.push(prefix.into());
        self
    }

    /// Override the wall-clock formatter used by [`Prefix::Timestamp`]
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_formatter<F: TimestampFormatter + 'static>(mut self, formatter: F) -> Self {
        self.config.timestamps = Arc::new(formatter);
        self
    }

    /// Override the assembly of (level, prefixes, args) into the final line
    #[must_use = "builder methods return a new value"]
    pub fn message_formatter<F: MessageFormatter + 'static>(mut self, formatter: F) -> Self {
        self.config.formatter = Arc::new(formatter);
        self
    }

    /// Override the sink receiving `(level, line)`
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.config.sink = Arc::new(sink);
        self
    }

    /// Resolve the configuration into a logger: one binding pass over all
    /// five levels.
    #[must_use]
    pub fn build(self) -> Logger {
        let bound = rebuild(&self.config);
        Logger {
            dispatch: RwLock::new(Dispatch {
                config: self.config,
                bound,
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
