//! Prefix tokens and per-call resolution
//!
//! A prefix is either opaque literal text or a dynamic token. Tokens are
//! compared by tag, never by string value, so literal prefix text can never
//! collide with them. Resolution happens fresh on every logging call: two
//! calls through the same bound function may observe different timestamps,
//! and the severity label always reflects the call's own level.

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use super::log_level::LogLevel;
use super::timestamp::TimestampFormatter;

pub(crate) const ISO_8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prefix {
    /// Opaque text passed through untouched
    Literal(String),
    /// Wall-clock time rendered through the configured timestamp formatter
    Timestamp,
    /// Current UTC instant as ISO 8601 with millisecond precision,
    /// independent of the configured timestamp formatter
    IsoTimestamp,
    /// Upper-cased name of the call's severity
    SeverityLabel,
}

/// Alias for callers that think of the severity label as "the log level".
pub const LOG_LEVEL: Prefix = Prefix::SeverityLabel;

impl From<&str> for Prefix {
    fn from(text: &str) -> Self {
        Prefix::Literal(text.to_string())
    }
}

impl From<String> for Prefix {
    fn from(text: String) -> Self {
        Prefix::Literal(text)
    }
}

/// Resolve the prefix sequence against the call's level and the current
/// wall clock, in configuration order.
pub(crate) fn resolve(
    prefixes: &[Prefix],
    level: LogLevel,
    timestamps: &dyn TimestampFormatter,
) -> Vec<String> {
    prefixes
        .iter()
        .map(|prefix| match prefix {
            Prefix::Literal(text) => text.clone(),
            Prefix::Timestamp => timestamps.format(&Local::now()),
            Prefix::IsoTimestamp => Utc::now().format(ISO_8601_MILLIS).to_string(),
            Prefix::SeverityLabel => level.to_str().to_string(),
        })
        .collect()
}
