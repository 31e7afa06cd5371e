//! Parsing of numbers typed by users.
//!
//! Users answer prompts in free text. Whole numbers are parsed as-is after
//! trimming; decimals accept either a comma or a point as the separator.

use super::ValidationError;

/// Parses a whole number answer such as a price bound.
pub fn parse_whole_number(field: &str, text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_integer(field, trimmed))
}

/// Parses a decimal answer such as a distance in kilometres.
///
/// `"2,5"` and `"2.5"` both yield `2.5`. Non-finite values are rejected.
pub fn parse_decimal(field: &str, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::invalid_decimal(field, trimmed)),
    }
}
