//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level text did not match any severity or the off sentinel
    #[error("invalid log level: '{text}'")]
    InvalidLevel { text: String },
}

impl LoggerError {
    /// Create an invalid level error from the offending text
    pub fn invalid_level(text: impl Into<String>) -> Self {
        LoggerError::InvalidLevel { text: text.into() }
    }
}
