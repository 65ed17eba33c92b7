//! Conduit estimate: input and result types plus the pure calculation

pub mod calculator;
pub mod types;

pub use calculator::{estimate, material_counts, round_2dp, MAX_BENDS_PER_RUN};
pub use types::{
    ComplexityTier, ConduitType, EstimateInput, EstimateResult, InstallLocation, MaterialCounts,
};
