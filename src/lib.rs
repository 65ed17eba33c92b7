//! conduit-estimator - Conduit material and labor estimates
//!
//! Turns a conduit job description (footage, bends, location, crew, labor
//! rate, complexity) and a unit price table into material counts, labor
//! hours and a cost breakdown.
//!
//! # Architecture
//!
//! - **estimator**: pure calculation, no I/O
//! - **pricing**: price table and the providers that supply it
//! - **validation**, **report**, **cli**, **telemetry**: the front end

pub mod errors;
pub mod estimator;
pub mod pricing;
pub mod validation;

// Re-export commonly used types
pub use errors::{EstimatorError, Result};
pub use estimator::{
    estimate, ComplexityTier, ConduitType, EstimateInput, EstimateResult, InstallLocation,
    MaterialCounts,
};
pub use pricing::{Material, PriceProvider, PriceTable};

// Presentation layer
pub mod cli;
pub mod report;
pub mod telemetry;
