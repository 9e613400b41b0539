//! somascale - On-device compute engine for body mass index assessment
//!
//! somascale turns a height/weight measurement into a classified BMI
//! assessment: a one-decimal BMI value, one of four fixed categories, and
//! category-specific guidance, optionally wrapped in a provenance-stamped
//! `bmi.assessment.v1` JSON payload.
//!
//! ## Modules
//!
//! - **Engine**: pure computation and classification ([`compute_bmi`])
//! - **Guidance**: static per-category guidance table
//! - **Session**: stateful controller for hosts driving the engine
//!   incrementally (one slider axis at a time)
//! - **Report**: JSON payload encoding with producer/provenance metadata

pub mod engine;
pub mod error;
pub mod guidance;
pub mod report;
pub mod session;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use engine::{assess, classify, compute_bmi, raw_bmi};
pub use error::ComputeError;
pub use report::{AssessmentEncoder, ASSESSMENT_VERSION};
pub use session::AssessmentSession;
pub use types::{
    AssessmentPayload, BmiCategory, BmiResult, CategoryInfo, Measurement, HEIGHT_SLIDER_CM,
    WEIGHT_SLIDER_KG,
};

/// Engine version embedded in all assessment payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for assessment payloads
pub const PRODUCER_NAME: &str = "somascale";
