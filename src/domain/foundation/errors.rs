//! Error types for the domain layer.
//!
//! The inference operations themselves never fail: malformed or missing input
//! degrades to empty results. These errors exist for the strict constructors
//! offered to callers that want to reject bad values up front.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("content");
        assert_eq!(format!("{}", err), "Field 'content' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_whole_numbers() {
        let err = ValidationError::out_of_range("score", 0.0, 10.0, 12.0);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 10, got 12"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_fractions() {
        let err = ValidationError::out_of_range("score", 0.0, 10.0, -0.5);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 10, got -0.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("level", "unknown force level 'extreme'");
        assert_eq!(
            format!("{}", err),
            "Field 'level' has invalid format: unknown force level 'extreme'"
        );
    }
}
