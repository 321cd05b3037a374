//! Core logger types and traits

pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod prefix;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use format::{MessageFormatter, TextFormat};
pub use log_level::{LevelFilter, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use prefix::{Prefix, LOG_LEVEL};
pub use sink::Sink;
pub use timestamp::{TimestampFormat, TimestampFormatter};
