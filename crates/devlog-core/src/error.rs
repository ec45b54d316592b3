//! Error types for devlog core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing hints.

use thiserror::Error;

/// Result type alias for devlog operations.
pub type Result<T> = std::result::Result<T, DevlogError>;

/// Core error type for devlog operations.
#[derive(Debug, Error)]
pub enum DevlogError {
    /// A candidate entry field failed validation
    #[error("Validation error: {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The document is missing a required section marker
    #[error("Structure error: {0}")]
    Structure(String),

    /// A header or summary row holds a malformed value
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Resource not found (document, entry)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DevlogError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DevlogError::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        DevlogError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for DevlogError {
    fn from(err: std::io::Error) -> Self {
        DevlogError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_names_field() {
        let err = DevlogError::validation("component", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: component: must not be empty"
        );
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = DevlogError::parse(7, "entry id \"abc\" is not numeric");
        assert!(err.to_string().contains("line 7"));
        assert!(matches!(err, DevlogError::Parse { line: 7, .. }));
    }
}
