//! # Input Pre-check
//!
//! Turns raw text fields into numbers before the engine sees them. Empty
//! fields are reported as [`CalcError::MissingField`], which is distinct from
//! the engine's own range checks.

use crate::calculations::one_rep_max::{MAX_REPS, MIN_REPS};
use crate::errors::{CalcError, CalcResult};

/// Parse the weight field.
///
/// Range checking is left to the engine; this only rejects empty and
/// non-numeric text.
pub fn parse_weight(text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field("weight"));
    }
    let weight: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input("weight", trimmed, "Weight must be a number"))?;
    if !weight.is_finite() {
        return Err(CalcError::invalid_input("weight", trimmed, "Weight must be a number"));
    }
    Ok(weight)
}

/// Parse the reps field.
///
/// Negative whole numbers parse but fail with the reps range message, the
/// same one the engine uses for 0 and anything above 50.
pub fn parse_reps(text: &str) -> CalcResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field("reps"));
    }
    let reps: i64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input("reps", trimmed, "Reps must be a whole number"))?;
    u32::try_from(reps).map_err(|_| {
        CalcError::invalid_input(
            "reps",
            trimmed,
            format!("Reps must be between {} and {}", MIN_REPS, MAX_REPS),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("225").unwrap(), 225.0);
        assert_eq!(parse_weight(" 102.5 ").unwrap(), 102.5);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(parse_weight("").unwrap_err(), CalcError::missing_field("weight"));
        assert_eq!(parse_reps("   ").unwrap_err(), CalcError::missing_field("reps"));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(parse_weight("abc").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_weight("12abc").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_weight("inf").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_reps("5.5").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_reps() {
        let err = parse_reps("-3").unwrap_err();
        assert_eq!(err.user_message(), "Reps must be between 1 and 50");
    }

    #[test]
    fn test_zero_passes_precheck() {
        // Range is the engine's job
        assert_eq!(parse_weight("0").unwrap(), 0.0);
        assert_eq!(parse_reps("0").unwrap(), 0);
    }
}
