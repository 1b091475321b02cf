//! BMI and cholesterol formulas.
//!
//! The unchecked formulas follow IEEE-754 semantics: a zero height gives
//! infinity (or NaN for `0 / 0`) instead of an error. Use `checked_bmi`
//! when bad measurements should be rejected.

use crate::{validation::validate_measurements, Result};

/// Body mass index from height (meters) and weight (kilograms)
pub fn bmi(height_m: f64, weight_kg: f64) -> f64 {
    weight_kg / height_m.powi(2)
}

/// Total cholesterol as the sum of LDL and HDL
///
/// Widened to `i64` so any pair of `i32` readings sums exactly.
pub fn total_cholesterol(ldl: i32, hdl: i32) -> i64 {
    i64::from(ldl) + i64::from(hdl)
}

/// Body mass index, rejecting non-positive or non-finite measurements
pub fn checked_bmi(height_m: f64, weight_kg: f64) -> Result<f64> {
    validate_measurements(height_m, weight_kg)?;
    Ok(bmi(height_m, weight_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_bmi_formula() {
        let value = bmi(1.70, 65.0);
        assert!((value - 65.0 / (1.70 * 1.70)).abs() < 1e-12);
        assert!((value - 22.49).abs() < 0.01);
    }

    #[test]
    fn test_bmi_matches_formula_across_inputs() {
        for &(h, w) in &[(1.0, 1.0), (1.55, 48.2), (2.10, 130.0), (0.5, 3.2)] {
            assert!((bmi(h, w) - w / (h * h)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bmi_zero_height_is_not_finite() {
        assert_eq!(bmi(0.0, 65.0), f64::INFINITY);
        assert!(bmi(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_total_cholesterol() {
        assert_eq!(total_cholesterol(100, 50), 150);
        assert_eq!(total_cholesterol(-20, 5), -15);
    }

    #[test]
    fn test_total_cholesterol_does_not_overflow() {
        assert_eq!(
            total_cholesterol(i32::MAX, i32::MAX),
            2 * i64::from(i32::MAX)
        );
        assert_eq!(
            total_cholesterol(i32::MIN, i32::MIN),
            2 * i64::from(i32::MIN)
        );
    }

    #[test]
    fn test_checked_bmi() {
        let value = checked_bmi(1.70, 65.0).unwrap();
        assert_eq!(value, bmi(1.70, 65.0));

        match checked_bmi(0.0, 65.0) {
            Err(Error::InvalidMeasurement { field, value }) => {
                assert_eq!(field, "height");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected InvalidMeasurement, got {:?}", other),
        }
    }
}
