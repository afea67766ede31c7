//! # Error Types
//!
//! Structured error types for tally_core. The only error a calculation can
//! produce is [`TallyError::InvalidNumericInput`]; the remaining variants come
//! from loading and validating [`Settings`](crate::settings::Settings).
//!
//! ## Example
//!
//! ```rust
//! use tally_core::errors::{TallyError, TallyResult};
//!
//! fn require_number(field: &str, text: &str, value: f64) -> TallyResult<f64> {
//!     if value.is_nan() {
//!         return Err(TallyError::invalid_numeric_input(field, text));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_number("amount", "abc", f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tally_core operations
pub type TallyResult<T> = Result<T, TallyError>;

/// Structured error type for tally operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TallyError {
    /// A field or prompt value did not parse to a number
    #[error("Invalid numeric input for '{field}': {value:?}")]
    InvalidNumericInput { field: String, value: String },

    /// Settings file could not be opened or read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A settings value is out of range
    #[error("Invalid setting '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },
}

impl TallyError {
    /// Create an InvalidNumericInput error
    pub fn invalid_numeric_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        TallyError::InvalidNumericInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        TallyError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TallyError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error is shown to the user as a dialog rather than aborting
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TallyError::InvalidNumericInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TallyError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            TallyError::FileError { .. } => "FILE_ERROR",
            TallyError::SerializationError { .. } => "SERIALIZATION_ERROR",
            TallyError::InvalidSettings { .. } => "INVALID_SETTINGS",
        }
    }
}
