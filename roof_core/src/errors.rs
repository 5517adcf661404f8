//! # Error Types
//!
//! Structured error types for roof_core. Errors carry enough context to
//! be handled programmatically by API consumers and rendered directly to
//! end users.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_ft: f64) -> CalcResult<()> {
//!     if length_ft <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_ft".to_string(),
//!             value: length_ft.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roof_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
///
/// Note that the estimation formula itself never fails: unrecognized
/// roof-type or material tags degrade to documented defaults. Errors come
/// from caller-side input validation and from workbook I/O.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive dimension, rating out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An estimate record does not exist in the workbook
    #[error("Estimate record not found: {id}")]
    RecordNotFound { id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Workbook file is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Workbook schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a RecordNotFound error
    pub fn record_not_found(id: impl Into<String>) -> Self {
        CalcError::RecordNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("width_ft", "-4.0", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::record_not_found("abc").error_code(),
            "RECORD_NOT_FOUND"
        );
        assert_eq!(
            CalcError::invalid_input("rating", "7", "out of range").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::file_locked("wb.json", "someone", "now").is_recoverable());
        assert!(!CalcError::record_not_found("abc").is_recoverable());
    }
}
