//! Core types for the somascale engine
//!
//! This module defines the data that flows through an assessment: the input
//! measurement, the computed result, and the payload structures emitted to
//! consumers.

use crate::error::ComputeError;
use serde::{Deserialize, Serialize};

/// Slider bounds for host UIs (cm)
pub const HEIGHT_SLIDER_CM: (f64, f64) = (120.0, 220.0);

/// Slider bounds for host UIs (kg)
pub const WEIGHT_SLIDER_KG: (f64, f64) = (30.0, 150.0);

/// A height/weight pair driving the calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Measurement {
    /// Create a validated measurement.
    ///
    /// Height must be positive and finite; weight must be non-negative and
    /// finite. Out-of-domain values are rejected rather than carried into
    /// the arithmetic, where they would surface as NaN or infinity.
    pub fn new(height_cm: f64, weight_kg: f64) -> Result<Self, ComputeError> {
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(ComputeError::InvalidHeight(height_cm));
        }
        if !(weight_kg.is_finite() && weight_kg >= 0.0) {
            return Err(ComputeError::InvalidWeight(weight_kg));
        }
        Ok(Self {
            height_cm,
            weight_kg,
        })
    }

    /// Create a measurement snapped to the slider bounds (height 120-220
    /// cm, weight 30-150 kg). Non-finite inputs snap to the lower bound.
    pub fn clamped(height_cm: f64, weight_kg: f64) -> Self {
        let clamp = |v: f64, (lo, hi): (f64, f64)| {
            if v.is_finite() {
                v.clamp(lo, hi)
            } else {
                lo
            }
        };
        Self {
            height_cm: clamp(height_cm, HEIGHT_SLIDER_CM),
            weight_kg: clamp(weight_kg, WEIGHT_SLIDER_KG),
        }
    }

    /// Height converted to meters
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}

/// BMI classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    /// All four categories, in ascending threshold order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];
}

/// Result of a BMI computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    /// Category classified from the unrounded quotient
    pub category: BmiCategory,
}

/// Static guidance record for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Human-readable BMI range for this category
    pub range: &'static str,
    /// One-line description shown with the result
    pub description: &'static str,
    /// Actionable tips, always four per category
    pub tips: [&'static str; 4],
}

/// Producer metadata embedded in assessment payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Provenance information for an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentProvenance {
    pub computed_at_utc: String,
}

/// Owned guidance block carried in payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentGuidance {
    pub range: String,
    pub description: String,
    pub tips: Vec<String>,
}

impl From<&CategoryInfo> for AssessmentGuidance {
    fn from(info: &CategoryInfo) -> Self {
        Self {
            range: info.range.to_string(),
            description: info.description.to_string(),
            tips: info.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Complete assessment payload (bmi.assessment.v1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentPayload {
    pub schema_version: String,
    pub producer: AssessmentProducer,
    pub provenance: AssessmentProvenance,
    pub measurement: Measurement,
    pub result: BmiResult,
    pub guidance: AssessmentGuidance,
}
