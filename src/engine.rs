//! BMI computation
//!
//! This module computes the BMI quotient and classifies it:
//! - `value` is `weight_kg / (height_cm / 100)^2`, rounded to one decimal
//! - `category` is classified from the unrounded quotient

use crate::error::ComputeError;
use crate::types::{BmiCategory, BmiResult, Measurement};

/// Compute a BMI result from a height/weight pair.
///
/// Height must be positive and finite, weight non-negative and finite;
/// anything else is rejected as a typed error rather than carried through
/// the division.
///
/// # Example
/// ```
/// use somascale::{compute_bmi, BmiCategory};
///
/// let result = compute_bmi(170.0, 70.0).unwrap();
/// assert_eq!(result.value, 24.2);
/// assert_eq!(result.category, BmiCategory::Normal);
/// ```
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult, ComputeError> {
    let measurement = Measurement::new(height_cm, weight_kg)?;
    Ok(assess(&measurement))
}

/// Compute a BMI result from an already-validated measurement.
pub fn assess(measurement: &Measurement) -> BmiResult {
    let raw = raw_bmi(measurement);
    BmiResult {
        value: round_one_decimal(raw),
        category: classify(raw),
    }
}

/// The unrounded BMI quotient
pub fn raw_bmi(measurement: &Measurement) -> f64 {
    let m = measurement.height_m();
    measurement.weight_kg / (m * m)
}

/// Classify an unrounded BMI quotient into a category.
///
/// Thresholds are evaluated in ascending order, first match wins:
/// `< 18.5` underweight, `< 25` normal, `< 30` overweight, else obese.
pub fn classify(raw: f64) -> BmiCategory {
    if raw < 18.5 {
        BmiCategory::Underweight
    } else if raw < 25.0 {
        BmiCategory::Normal
    } else if raw < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Round half away from zero to one decimal place
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
