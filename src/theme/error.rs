//! Error types for theme extraction plumbing
//!
//! The extraction core itself never fails — malformed CSS degrades to a
//! partial or empty snapshot. These types cover the fallible edges around
//! it: reading stylesheet sources and parsing the fallback-variable JSON.

use thiserror::Error;

/// Error type for theme_lift operations
#[derive(Error, Debug)]
pub enum ThemeError {
    /// IO errors (reading stylesheet or fallback files)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors for the fallback mapping
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for theme_lift operations
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> ThemeResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> ThemeResult<T> {
        self.map_err(|e| ThemeError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> ThemeResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> ThemeResult<T> {
        self.map_err(|e| ThemeError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_context_attaches_message() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.with_io_context("Failed to read styles.css").unwrap_err();
        assert!(err.to_string().contains("Failed to read styles.css"));
    }

    #[test]
    fn test_json_context_attaches_message() {
        let result: Result<(), serde_json::Error> =
            serde_json::from_str("not json").map(|_: serde_json::Value| ());
        let err = result.with_json_context("Failed to parse fallback").unwrap_err();
        assert!(err.to_string().contains("Failed to parse fallback"));
    }
}
