//! Error handling for TikEarnBot
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for TikEarnBot application
#[derive(Error, Debug)]
pub enum TikEarnError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for TikEarnBot operations
pub type Result<T> = std::result::Result<T, TikEarnError>;

impl TikEarnError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TikEarnError::Telegram(_) => true,
            TikEarnError::ConfigLoad(_) => false,
            TikEarnError::Config(_) => false,
            TikEarnError::Io(_) => true,
            TikEarnError::Serialization(_) => false,
            TikEarnError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TikEarnError::ConfigLoad(_) => ErrorSeverity::Critical,
            TikEarnError::Config(_) => ErrorSeverity::Critical,
            // A document that no longer parses blocks every command
            TikEarnError::Serialization(_) => ErrorSeverity::Critical,
            TikEarnError::Telegram(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = TikEarnError::Config("Bot token is required".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Configuration error: Bot token is required");
    }

    #[test]
    fn test_io_errors_are_recoverable() {
        let err: TikEarnError = std::io::Error::new(std::io::ErrorKind::NotFound, "db.json").into();
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.severity().to_string(), "ERROR");
    }

    #[test]
    fn test_telegram_errors_are_warnings() {
        let err: TikEarnError = teloxide::RequestError::Api(teloxide::ApiError::BotBlocked).into();
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_string(), "WARN");
    }

    #[test]
    fn test_malformed_document_is_critical() {
        let err: TikEarnError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
