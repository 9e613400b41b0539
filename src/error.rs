//! Error types for somascale

use thiserror::Error;

/// Errors that can occur during computation
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Invalid height: {0} cm (must be positive and finite)")]
    InvalidHeight(f64),

    #[error("Invalid weight: {0} kg (must be non-negative and finite)")]
    InvalidWeight(f64),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
