//! Input validation for the text interface.
//!
//! The kernel assumes finite, well-formed doubles; malformed text and the
//! NaN/Infinity spellings `f64::from_str` accepts are rejected here, before
//! the kernel is ever called.

use crate::error::HarnessError;

/// Parse a finite `f64` from user input.
pub fn parse_finite(raw: &str) -> Result<f64, HarnessError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(HarnessError::InvalidNumber {
            raw: trimmed.to_string(),
            reason: "NaN and infinite values are not accepted".to_string(),
        }),
        Err(_) => Err(HarnessError::InvalidNumber {
            raw: trimmed.to_string(),
            reason: "not a numeric value".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_numbers() {
        assert_eq!(parse_finite("2.5").unwrap(), 2.5);
        assert_eq!(parse_finite(" -3 ").unwrap(), -3.0);
        assert_eq!(parse_finite("1e30").unwrap(), 1e30);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(parse_finite("abc").is_err());
        assert!(parse_finite("").is_err());
        assert!(parse_finite("2..5").is_err());
    }

    #[test]
    fn rejects_non_finite_spellings() {
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("-infinity").is_err());
    }
}
