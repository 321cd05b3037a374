//! Timestamp formatting strategies
//!
//! The timestamp prefix token renders the wall clock through a pluggable
//! [`TimestampFormatter`]. The [`TimestampFormat`] enum provides the common
//! formats; any closure taking a local instant works as well.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Wall-clock-to-string conversion used by the timestamp prefix token.
///
/// Implemented for any `Fn(&DateTime<Local>) -> String` closure, so a bare
/// closure can be supplied where a formatter is expected.
pub trait TimestampFormatter: Send + Sync {
    fn format(&self, instant: &DateTime<Local>) -> String;
}

impl<F> TimestampFormatter for F
where
    F: Fn(&DateTime<Local>) -> String + Send + Sync,
{
    fn format(&self, instant: &DateTime<Local>) -> String {
        self(instant)
    }
}

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use level_logger::core::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Simple;
/// let timestamp = format.render(&Local::now());
/// // Output: "2025-01-08 10:30:45"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`, zero-padded, local time
    ///
    /// This is the default format.
    #[default]
    Simple,

    /// ISO 8601 with milliseconds in UTC: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use level_logger::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render a local instant according to this format.
    #[must_use]
    pub fn render(&self, instant: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Simple => instant.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => instant
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => instant.to_rfc3339(),
            TimestampFormat::Unix => instant.timestamp().to_string(),
            TimestampFormat::UnixMillis => instant.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => instant.format(format_str).to_string(),
        }
    }
}

impl TimestampFormatter for TimestampFormat {
    fn format(&self, instant: &DateTime<Local>) -> String {
        self.render(instant)
    }
}
