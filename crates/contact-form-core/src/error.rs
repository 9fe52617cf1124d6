//! Core error types for the contact-form component.
//!
//! This module provides the [`ValidationError`] record attached to failing
//! fields, and the [`FormError`] enum covering the component's fallible
//! operations (field-name lookup and the JSON event bridge).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single field validation failure.
///
/// Carries the human-readable display message and a short machine-readable
/// code identifying the rule that failed (e.g. "required", "min_length",
/// "invalid"). At most one `ValidationError` is active per field at a time.
///
/// # Examples
///
/// ```
/// use contact_form_core::error::ValidationError;
///
/// let err = ValidationError::new("Error: lastName is a required field.", "required");
/// assert_eq!(err.code, "required");
/// assert_eq!(err.to_string(), "Error: lastName is a required field.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The display message, formatted as `Error: <fieldName> <reason>`.
    pub message: String,
    /// A short code identifying the rule that failed.
    pub code: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for the contact-form component.
///
/// The component itself is synchronous and local, so the fallible surface is
/// small: resolving a wire field name to a typed field, and decoding events
/// arriving over the JSON bridge.
#[derive(Error, Debug)]
pub enum FormError {
    /// A wire field name did not match any known field.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// An error occurred while encoding or decoding JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Error: email must be a valid email address.", "invalid");
        assert_eq!(err.to_string(), "Error: email must be a valid email address.");
    }

    #[test]
    fn test_validation_error_serializes_message_and_code() {
        let err = ValidationError::new("Error: lastName is a required field.", "required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "Error: lastName is a required field.");
        assert_eq!(json["code"], "required");
    }

    #[test]
    fn test_form_error_display() {
        let err = FormError::UnknownField("nickname".into());
        assert_eq!(err.to_string(), "Unknown field: nickname");

        let err = FormError::Serialization("unexpected end of input".into());
        assert_eq!(err.to_string(), "Serialization error: unexpected end of input");
    }
}
