//! Decimal text parsing for user-entered values.

use super::ValidationError;

/// Parses user-entered decimal text into an `f64`.
///
/// Accepts either comma or period as the decimal separator; the comma form
/// is normalized to a period before parsing. Empty input and anything that
/// fails to parse is a validation error naming the field.
pub fn parse_decimal(field: &str, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ValidationError::invalid_format(
            field,
            "value must be finite",
        )),
        Err(_) => Err(ValidationError::invalid_format(
            field,
            format!("'{}' is not a valid number", trimmed),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_period_decimal() {
        assert_eq!(parse_decimal("weight", "0.4").unwrap(), 0.4);
    }

    #[test]
    fn parses_comma_decimal() {
        assert_eq!(parse_decimal("weight", "0,4").unwrap(), 0.4);
    }

    #[test]
    fn parses_integer_text() {
        assert_eq!(parse_decimal("value", "100").unwrap(), 100.0);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_decimal("value", " 2,5 ").unwrap(), 2.5);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_decimal("value", "").is_err());
        assert!(parse_decimal("value", "   ").is_err());
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(parse_decimal("value", "abc").is_err());
        assert!(parse_decimal("value", "1.2.3").is_err());
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(parse_decimal("value", "inf").is_err());
        assert!(parse_decimal("value", "NaN").is_err());
    }
}
