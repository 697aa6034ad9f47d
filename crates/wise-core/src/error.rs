//! Error types for the console library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all console operations.
///
/// Transport failures, HTTP error statuses, and business errors reported
/// through the response envelope all end up here with a human-readable
/// message, so callers only ever deal with one error value.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Network failure or request timeout
    #[error("Network error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-success HTTP status
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Envelope carried a non-zero code
    #[error("{message}")]
    Business { code: i64, message: String },
    /// Response body could not be decoded
    #[error("Decode error: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Operation not valid in the view's current state
    #[error("View is {state}, cannot {operation}")]
    ViewState {
        state: &'static str,
        operation: &'static str,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ConsoleError {
        ConsoleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ConsoleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a reqwest failure, keeping the source for `Error::source`.
    pub fn transport(source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            "request timed out".to_string()
        } else {
            source.to_string()
        };
        Self::Transport { message, source }
    }

    /// HTTP error status with an optional backend message.
    pub fn http(status: u16, msg: Option<&str>) -> Self {
        let message = match msg {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => format!("HTTP Error: {status}"),
        };
        Self::Http { status, message }
    }

    /// Business failure reported through the envelope.
    pub fn business(code: i64, msg: &str) -> Self {
        let message = if msg.is_empty() {
            "request failed".to_string()
        } else {
            msg.to_string()
        };
        Self::Business { code, message }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to ConsoleError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ConsoleError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_backend_message() {
        let err = ConsoleError::http(404, Some("任务不存在"));
        assert_eq!(err.to_string(), "任务不存在");

        let err = ConsoleError::http(502, None);
        assert_eq!(err.to_string(), "HTTP Error: 502");

        let err = ConsoleError::http(500, Some(""));
        assert_eq!(err.to_string(), "HTTP Error: 500");
    }

    #[test]
    fn test_business_error_message() {
        let err = ConsoleError::business(1, "task not found");
        assert_eq!(err.to_string(), "task not found");

        let err = ConsoleError::business(7, "");
        assert_eq!(err.to_string(), "request failed");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = ConsoleError::invalid_input("pid").with_reason("unknown plan P9");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'pid': unknown plan P9"
        );
    }

    #[test]
    fn test_with_context() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("boom"));
        let err = io.with_context("reading config").unwrap_err();
        assert!(matches!(err, ConsoleError::Configuration { .. }));
        assert_eq!(err.to_string(), "Configuration error: reading config: boom");
    }
}
