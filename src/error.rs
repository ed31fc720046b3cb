//! Error types and handling infrastructure for swipesnake.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! library error types. The binary wraps these in `anyhow` for context at the top level.
//!
//! Gesture classification and the game model never fail; errors come from the terminal,
//! the configuration file and the statistics store.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for swipesnake operations.
#[derive(Error, Debug)]
pub enum SnakeError {
    /// File system and terminal IO failures
    #[error("IO operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration values that are present but unusable
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Configuration file that is not valid TOML for our schema
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Loading or saving persisted statistics
    #[error("Statistics error: {message}")]
    StatsError { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for swipesnake operations.
pub type Result<T> = std::result::Result<T, SnakeError>;

impl SnakeError {
    /// Create an Io error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a StatsError with a descriptive message
    pub fn stats(message: impl Into<String>) -> Self {
        Self::StatsError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SnakeError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let config_err = SnakeError::config("min_swipe_distance must be positive");
        assert_eq!(
            config_err.to_string(),
            "Configuration error: min_swipe_distance must be positive"
        );

        let stats_err = SnakeError::stats("stats file is read-only");
        assert_eq!(
            stats_err.to_string(),
            "Statistics error: stats file is read-only"
        );

        let arg_err = SnakeError::invalid_argument("unknown difficulty 'brutal'");
        assert_eq!(
            arg_err.to_string(),
            "Invalid argument: unknown difficulty 'brutal'"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            SnakeError::ui("Terminal resize failed"),
            SnakeError::UIError { .. }
        ));
        assert!(matches!(
            SnakeError::stats("stats file is locked"),
            SnakeError::StatsError { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let snake_err: SnakeError = io_err.into();

        match snake_err {
            SnakeError::Io { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let source = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err = SnakeError::ConfigParse {
            path: PathBuf::from("/tmp/config.toml"),
            source,
        };
        assert!(err.to_string().starts_with("Failed to parse config file /tmp/config.toml"));
    }
}
