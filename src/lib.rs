//! # Level Logger
//!
//! A lightweight leveled-logging facade with lazy prefix resolution and
//! pluggable formatting and sinks.
//!
//! ## Features
//!
//! - **Severity filtering**: five levels plus an `Off` sentinel, resolved at
//!   configuration time into pre-bound per-level functions, so a disabled
//!   level dispatches to a no-op
//! - **Prefix tokens**: timestamp, ISO timestamp, and severity-label tokens
//!   resolved fresh on every call, alongside arbitrary literal prefixes
//! - **Pluggable strategies**: timestamp formatter, message formatter, and
//!   sink are single-method traits with closure support
//! - **Derivation**: `extend()` snapshots a logger's configuration into a
//!   builder for independent child loggers
//!
//! ## Example
//!
//! ```
//! use level_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level(LevelFilter::Debug)
//!     .prefixes([Prefix::Timestamp, Prefix::SeverityLabel])
//!     .build();
//!
//! logger.info("server started");
//! logger.trace("suppressed");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LevelFilter, LogLevel, Logger, LoggerBuilder, LoggerError, MessageFormatter, Prefix,
        Result, Sink, TextFormat, TimestampFormat, TimestampFormatter, LOG_LEVEL,
    };
    pub use crate::sinks::ConsoleSink;
}

pub use crate::core::{
    LevelFilter, LogLevel, Logger, LoggerBuilder, LoggerError, MessageFormatter, Prefix, Result,
    Sink, TextFormat, TimestampFormat, TimestampFormatter, LOG_LEVEL,
};
pub use crate::sinks::ConsoleSink;
