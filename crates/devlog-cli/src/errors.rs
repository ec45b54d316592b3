//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use devlog_core::DevlogError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (devlog document, entry)
    NotFound { message: String, hint: String },

    /// Integrity check reported problems
    IntegrityFailed { issues: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::IntegrityFailed { issues } => {
                write!(f, "Integrity check failed ({} issue(s))", issues)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::IntegrityFailed { .. } => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Exit code for any error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<DevlogError>() {
        Some(DevlogError::Validation { .. }) => exit_codes::INVALID_INPUT,
        Some(DevlogError::Structure(_)) | Some(DevlogError::Parse { .. }) => {
            exit_codes::MALFORMED_DOCUMENT
        }
        Some(DevlogError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(DevlogError::Storage(_)) | None => exit_codes::FAILURE,
    }
}
