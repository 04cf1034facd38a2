//! # Error Types
//!
//! Structured error types for onerep_core. Every failure here is
//! user-correctable: the caller reports it and the user re-enters input.
//!
//! ## Example
//!
//! ```rust
//! use onerep_core::errors::{CalcError, CalcResult};
//!
//! fn validate_weight(weight: f64) -> CalcResult<()> {
//!     if weight <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "weight".to_string(),
//!             value: weight.to_string(),
//!             reason: "Weight must be greater than 0".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for onerep_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// `InvalidInput` is raised by the formula's own domain checks.
/// `MissingField` is the pre-check failure for empty form fields and is
/// reported before the engine runs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Weight unit string not recognized
    #[error("Unknown unit: '{unit}' (expected lbs or kg)")]
    UnknownUnit { unit: String },

    /// Table mode string not recognized
    #[error("Unknown table mode: '{mode}' (expected ladder or percentages)")]
    UnknownMode { mode: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit { unit: unit.into() }
    }

    /// Create an UnknownMode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        CalcError::UnknownMode { mode: mode.into() }
    }

    /// Short message suitable for an alert or status line.
    ///
    /// Drops the field/value context that `Display` carries.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InvalidInput { reason, .. } => reason.clone(),
            CalcError::MissingField { .. } => "Please enter both weight and reps".to_string(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownMode { .. } => "UNKNOWN_MODE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
