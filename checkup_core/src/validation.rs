//! Opt-in measurement validation.
//!
//! Construction and the plain formulas never validate. Callers that want
//! bad measurements rejected go through these checks (directly, via
//! `checked_bmi`, or via a strict checkup config).

use crate::{Error, Result};

/// Check that a single measurement is finite and strictly positive
fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMeasurement { field, value })
    }
}

/// Validate height (meters) and weight (kilograms)
///
/// Height is checked first, so a person with both values bad reports
/// `height`.
pub fn validate_measurements(height_m: f64, weight_kg: f64) -> Result<()> {
    check_positive("height", height_m)?;
    check_positive("weight", weight_kg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(result: Result<()>) -> &'static str {
        match result {
            Err(Error::InvalidMeasurement { field, .. }) => field,
            other => panic!("expected InvalidMeasurement, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_measurements() {
        assert!(validate_measurements(1.70, 65.0).is_ok());
        assert!(validate_measurements(0.45, 3.1).is_ok());
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert_eq!(invalid_field(validate_measurements(0.0, 65.0)), "height");
        assert_eq!(invalid_field(validate_measurements(-1.7, 65.0)), "height");
        assert_eq!(invalid_field(validate_measurements(1.7, 0.0)), "weight");
        assert_eq!(invalid_field(validate_measurements(1.7, -3.0)), "weight");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(invalid_field(validate_measurements(f64::NAN, 65.0)), "height");
        assert_eq!(
            invalid_field(validate_measurements(1.7, f64::INFINITY)),
            "weight"
        );
    }

    #[test]
    fn test_height_reported_first() {
        assert_eq!(invalid_field(validate_measurements(0.0, 0.0)), "height");
    }
}
