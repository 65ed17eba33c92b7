//! Error types for the conduit estimator
//!
//! The estimator core is total and never returns these; they come from the
//! layers around it (input sanitisation, price sources, configuration).

use thiserror::Error;

/// Main error type for the estimator crate
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// An input field is outside the estimator's domain
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A unit price is negative or not a number
    #[error("Invalid unit price for {material}: {value}")]
    InvalidPrice { material: String, value: f64 },

    /// Location label not recognised
    #[error("Unknown install location: {0} (expected indoor, outdoor or underground)")]
    UnknownLocation(String),

    /// Conduit type label not recognised
    #[error("Unknown conduit type: {0} (expected EMT, PVC, RMC or FMC)")]
    UnknownConduitType(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Price provider failures
    #[error("Price source error: {0}")]
    PriceSourceError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

impl EstimatorError {
    /// Shorthand for an [`EstimatorError::InvalidInput`]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimatorError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
