//! # Error Types
//!
//! Structured error types for balkon_core. The engine itself never fails on
//! numeric input (malformed numbers are coerced, malformed angles fall back to
//! 90°), so these errors only surface at the edges: decoding an enclosure
//! document, strict label parsing, and file access in front ends.
//!
//! ## Example
//!
//! ```rust
//! use balkon_core::errors::{BalkonError, BalkonResult};
//!
//! fn require_height(height_mm: f64) -> BalkonResult<f64> {
//!     if height_mm <= 0.0 {
//!         return Err(BalkonError::invalid_input(
//!             "height",
//!             height_mm.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(height_mm)
//! }
//!
//! assert!(require_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for balkon_core operations
pub type BalkonResult<T> = Result<T, BalkonError>;

/// Structured error type for the edges of the engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BalkonError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A label did not match any known option
    #[error("Unknown {kind} label: '{label}'")]
    UnknownLabel { kind: String, label: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BalkonError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BalkonError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownLabel error
    pub fn unknown_label(kind: impl Into<String>, label: impl Into<String>) -> Self {
        BalkonError::UnknownLabel {
            kind: kind.into(),
            label: label.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BalkonError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BalkonError::InvalidInput { .. } => "INVALID_INPUT",
            BalkonError::UnknownLabel { .. } => "UNKNOWN_LABEL",
            BalkonError::FileError { .. } => "FILE_ERROR",
            BalkonError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BalkonError {
    fn from(err: serde_json::Error) -> Self {
        BalkonError::SerializationError {
            reason: err.to_string(),
        }
    }
}
