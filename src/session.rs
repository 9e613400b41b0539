//! Assessment session
//!
//! A stateful controller owning the current measurement. Every mutation
//! revalidates the input and recomputes the result before returning, so the
//! stored result is never stale relative to the stored measurement.

use crate::engine::assess;
use crate::error::ComputeError;
use crate::types::{BmiResult, Measurement};

/// Stateful holder for the current measurement and its derived result.
///
/// Use this when a host UI drives the engine incrementally (slider moves,
/// one axis at a time) rather than calling [`crate::compute_bmi`] directly.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    measurement: Measurement,
    result: BmiResult,
}

impl Default for AssessmentSession {
    /// Slider-host starting point: 170 cm, 70 kg
    fn default() -> Self {
        let measurement = Measurement {
            height_cm: 170.0,
            weight_kg: 70.0,
        };
        Self {
            result: assess(&measurement),
            measurement,
        }
    }
}

impl AssessmentSession {
    /// Create a session from an initial measurement
    pub fn new(measurement: Measurement) -> Result<Self, ComputeError> {
        let measurement = Measurement::new(measurement.height_cm, measurement.weight_kg)?;
        Ok(Self {
            result: assess(&measurement),
            measurement,
        })
    }

    /// Create a session from raw height/weight values
    pub fn from_values(height_cm: f64, weight_kg: f64) -> Result<Self, ComputeError> {
        Self::new(Measurement::new(height_cm, weight_kg)?)
    }

    /// Current measurement
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Result for the current measurement, never stale
    pub fn result(&self) -> BmiResult {
        self.result
    }

    /// Update the height and recompute.
    ///
    /// On error the session keeps its previous measurement and result.
    pub fn set_height_cm(&mut self, height_cm: f64) -> Result<BmiResult, ComputeError> {
        self.set_measurement(Measurement::new(height_cm, self.measurement.weight_kg)?)
    }

    /// Update the weight and recompute.
    ///
    /// On error the session keeps its previous measurement and result.
    pub fn set_weight_kg(&mut self, weight_kg: f64) -> Result<BmiResult, ComputeError> {
        self.set_measurement(Measurement::new(self.measurement.height_cm, weight_kg)?)
    }

    /// Replace the whole measurement and recompute.
    ///
    /// Revalidates the measurement: `Measurement` fields are public, so a
    /// value built by hand may be out of domain.
    pub fn set_measurement(&mut self, measurement: Measurement) -> Result<BmiResult, ComputeError> {
        let measurement = Measurement::new(measurement.height_cm, measurement.weight_kg)?;
        self.measurement = measurement;
        self.result = assess(&measurement);
        Ok(self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BmiCategory;

    #[test]
    fn test_default_session_initial_state() {
        let session = AssessmentSession::default();
        assert_eq!(session.measurement().height_cm, 170.0);
        assert_eq!(session.measurement().weight_kg, 70.0);
        assert_eq!(session.result().value, 24.2);
        assert_eq!(session.result().category, BmiCategory::Normal);
    }

    #[test]
    fn test_result_tracks_weight_changes() {
        let mut session = AssessmentSession::default();

        // 80 / 2.89 = 27.7
        let result = session.set_weight_kg(80.0).unwrap();
        assert_eq!(result.category, BmiCategory::Overweight);
        assert_eq!(session.result(), result);

        // 50 / 2.89 = 17.3
        let result = session.set_weight_kg(50.0).unwrap();
        assert_eq!(result.category, BmiCategory::Underweight);
        assert_eq!(session.result(), result);

        // 95 / 2.89 = 32.9
        let result = session.set_weight_kg(95.0).unwrap();
        assert_eq!(result.category, BmiCategory::Obese);
        assert_eq!(session.result(), result);
    }

    #[test]
    fn test_result_tracks_height_changes() {
        let mut session = AssessmentSession::from_values(180.0, 95.0).unwrap();
        assert_eq!(session.result().value, 29.3);
        assert_eq!(session.result().category, BmiCategory::Overweight);

        let result = session.set_height_cm(210.0).unwrap();
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_failed_mutation_preserves_state() {
        let mut session = AssessmentSession::default();
        let before_measurement = session.measurement();
        let before_result = session.result();

        assert!(session.set_height_cm(0.0).is_err());
        assert!(session.set_weight_kg(-5.0).is_err());
        assert!(session
            .set_measurement(Measurement {
                height_cm: f64::NAN,
                weight_kg: 70.0,
            })
            .is_err());

        assert_eq!(session.measurement(), before_measurement);
        assert_eq!(session.result(), before_result);
    }

    #[test]
    fn test_from_values_rejects_invalid() {
        assert!(AssessmentSession::from_values(-1.0, 70.0).is_err());
    }
}
