//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when user-supplied text cannot be turned into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' expects a whole number, got '{input}'")]
    InvalidInteger { field: String, input: String },

    #[error("Field '{field}' expects a decimal number, got '{input}'")]
    InvalidDecimal { field: String, input: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid integer validation error.
    pub fn invalid_integer(field: impl Into<String>, input: impl Into<String>) -> Self {
        ValidationError::InvalidInteger {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Creates an invalid decimal validation error.
    pub fn invalid_decimal(field: impl Into<String>, input: impl Into<String>) -> Self {
        ValidationError::InvalidDecimal {
            field: field.into(),
            input: input.into(),
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
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("city");
        assert_eq!(err.to_string(), "Field 'city' cannot be empty");
    }

    #[test]
    fn invalid_integer_displays_input() {
        let err = ValidationError::invalid_integer("min_price", "abc");
        assert_eq!(
            err.to_string(),
            "Field 'min_price' expects a whole number, got 'abc'"
        );
    }

    #[test]
    fn invalid_decimal_displays_input() {
        let err = ValidationError::invalid_decimal("max_distance", "far");
        assert_eq!(
            err.to_string(),
            "Field 'max_distance' expects a decimal number, got 'far'"
        );
    }
}
