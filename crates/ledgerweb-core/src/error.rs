//! Error types for ledgerweb-core
//!
//! One variant per failure kind; the HTTP boundary maps kinds to status
//! codes through [`ErrorCode`] rather than inspecting error types.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Write payload failed validation
    Validation,
    /// Transaction index outside the parsed sequence
    NotFound,
    /// Ledger file could not be read or rewritten
    Io,
    /// External accounting tool failed
    External,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::Validation => write!(f, "VALIDATION"),
            ErrorCode::NotFound => write!(f, "NOT_FOUND"),
            ErrorCode::Io => write!(f, "IO"),
            ErrorCode::External => write!(f, "EXTERNAL"),
        }
    }
}

/// Error severity levels for log routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller mistake; expected in normal operation
    Warning,
    /// Server-side failure
    Error,
}

/// Main error type for ledgerweb-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("transaction index {index} out of range")]
    NotFound { index: i64 },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("external command failed: {message}")]
    External { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Validation { .. } => ErrorCode::Validation,
            CoreError::NotFound { .. } => ErrorCode::NotFound,
            CoreError::Io(_) => ErrorCode::Io,
            CoreError::External { .. } => ErrorCode::External,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Validation { .. } => ErrorSeverity::Warning,
            CoreError::NotFound { .. } => ErrorSeverity::Warning,
            CoreError::Io(_) => ErrorSeverity::Error,
            CoreError::External { .. } => ErrorSeverity::Error,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::Validation.to_string(), "VALIDATION");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(ErrorCode::Io.to_string(), "IO");
        assert_eq!(ErrorCode::External.to_string(), "EXTERNAL");
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::NotFound).unwrap(),
            "\"NOT_FOUND\""
        );
    }

    #[test]
    fn test_core_error_code_and_severity() {
        let error = CoreError::NotFound { index: 3 };
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        let error = CoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(error.code(), ErrorCode::Io);
        assert_eq!(error.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_not_found_message_carries_index() {
        let error = CoreError::NotFound { index: -1 };
        assert_eq!(error.to_string(), "transaction index -1 out of range");
    }
}
