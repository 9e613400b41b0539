//! Assessment encoding
//!
//! This module encodes a measurement and its result into a
//! `bmi.assessment.v1` JSON payload carrying producer and provenance
//! metadata alongside the guidance block for the classified category.

use crate::error::ComputeError;
use crate::types::{
    AssessmentGuidance, AssessmentPayload, AssessmentProducer, AssessmentProvenance, BmiResult,
    Measurement,
};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current assessment schema version
pub const ASSESSMENT_VERSION: &str = "bmi.assessment.v1";

/// Encoder for producing assessment payloads
pub struct AssessmentEncoder {
    instance_id: String,
}

impl Default for AssessmentEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Encode a measurement and its result into an assessment payload
    pub fn encode(&self, measurement: &Measurement, result: &BmiResult) -> AssessmentPayload {
        let producer = AssessmentProducer {
            name: PRODUCER_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let provenance = AssessmentProvenance {
            computed_at_utc: Utc::now().to_rfc3339(),
        };

        AssessmentPayload {
            schema_version: ASSESSMENT_VERSION.to_string(),
            producer,
            provenance,
            measurement: *measurement,
            result: *result,
            guidance: AssessmentGuidance::from(result.category.guidance()),
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(
        &self,
        measurement: &Measurement,
        result: &BmiResult,
    ) -> Result<String, ComputeError> {
        let payload = self.encode(measurement, result);
        serde_json::to_string_pretty(&payload).map_err(ComputeError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_bmi;
    use crate::types::BmiCategory;
    use pretty_assertions::assert_eq;

    fn sample() -> (Measurement, BmiResult) {
        let measurement = Measurement::new(180.0, 95.0).unwrap();
        let result = compute_bmi(180.0, 95.0).unwrap();
        (measurement, result)
    }

    #[test]
    fn test_encode_populates_metadata() {
        let (measurement, result) = sample();
        let encoder = AssessmentEncoder::with_instance_id("test-instance".to_string());
        let payload = encoder.encode(&measurement, &result);

        assert_eq!(payload.schema_version, ASSESSMENT_VERSION);
        assert_eq!(payload.producer.name, PRODUCER_NAME);
        assert_eq!(payload.producer.version, ENGINE_VERSION);
        assert_eq!(payload.producer.instance_id, "test-instance");
        assert!(!payload.provenance.computed_at_utc.is_empty());
    }

    #[test]
    fn test_encode_carries_result_and_guidance() {
        let (measurement, result) = sample();
        let payload = AssessmentEncoder::new().encode(&measurement, &result);

        assert_eq!(payload.result.value, 29.3);
        assert_eq!(payload.result.category, BmiCategory::Overweight);
        assert_eq!(payload.guidance.range, "25 - 29.9");
        assert_eq!(payload.guidance.tips.len(), 4);
    }

    #[test]
    fn test_payload_json_round_trip() {
        let (measurement, result) = sample();
        let json = AssessmentEncoder::new()
            .encode_to_json(&measurement, &result)
            .unwrap();

        let parsed: AssessmentPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result.category, BmiCategory::Overweight);
        assert_eq!(parsed.measurement.height_cm, 180.0);

        // Wire keys are the lowercase category names
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["category"], "overweight");
        assert_eq!(value["schema_version"], "bmi.assessment.v1");
    }

    #[test]
    fn test_fresh_encoders_get_distinct_instance_ids() {
        let (measurement, result) = sample();
        let a = AssessmentEncoder::new().encode(&measurement, &result);
        let b = AssessmentEncoder::new().encode(&measurement, &result);
        assert_ne!(a.producer.instance_id, b.producer.instance_id);
    }
}
