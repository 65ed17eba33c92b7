//! Estimator type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::errors::EstimatorError;
use crate::pricing::{Material, PriceTable};

/// Where the conduit is installed; decides strap spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallLocation {
    Indoor,
    Outdoor,
    Underground,
}

impl InstallLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallLocation::Indoor => "Indoor",
            InstallLocation::Outdoor => "Outdoor",
            InstallLocation::Underground => "Underground",
        }
    }
}

impl FromStr for InstallLocation {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indoor" => Ok(InstallLocation::Indoor),
            "outdoor" => Ok(InstallLocation::Outdoor),
            "underground" => Ok(InstallLocation::Underground),
            _ => Err(EstimatorError::UnknownLocation(s.to_string())),
        }
    }
}

impl fmt::Display for InstallLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labor difficulty classification
///
/// Deserializes leniently through [`ComplexityTier::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ComplexityTier {
    Light,
    Standard,
    Complex,
}

impl ComplexityTier {
    /// Parse a tier label. Anything unrecognised is treated as Standard.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "light" => ComplexityTier::Light,
            "complex" => ComplexityTier::Complex,
            _ => ComplexityTier::Standard,
        }
    }

    /// Crew-hours needed per 100 ft of conduit
    pub fn hours_per_100ft(&self) -> f64 {
        match self {
            ComplexityTier::Light => 4.5,
            ComplexityTier::Standard => 6.0,
            ComplexityTier::Complex => 9.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Light => "Light",
            ComplexityTier::Standard => "Standard",
            ComplexityTier::Complex => "Complex",
        }
    }

    /// Label with the labor constant, e.g. `Light (4.5 hrs/100 ft)`
    pub fn describe(&self) -> String {
        format!("{} ({:.1} hrs/100 ft)", self.as_str(), self.hours_per_100ft())
    }
}

impl FromStr for ComplexityTier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for ComplexityTier {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conduit material. Reported only; it does not change any quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConduitType {
    Emt,
    Pvc,
    Rmc,
    Fmc,
}

impl ConduitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConduitType::Emt => "EMT",
            ConduitType::Pvc => "PVC",
            ConduitType::Rmc => "RMC",
            ConduitType::Fmc => "FMC",
        }
    }
}

impl FromStr for ConduitType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EMT" => Ok(ConduitType::Emt),
            "PVC" => Ok(ConduitType::Pvc),
            "RMC" => Ok(ConduitType::Rmc),
            "FMC" => Ok(ConduitType::Fmc),
            _ => Err(EstimatorError::UnknownConduitType(s.to_string())),
        }
    }
}

impl fmt::Display for ConduitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to estimate one conduit job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Total linear footage of conduit
    pub footage_feet: f64,

    /// Conduit material (informational)
    pub conduit_type: ConduitType,

    /// Install location
    pub location: InstallLocation,

    /// Trade size in inches (informational)
    pub trade_size_inches: f64,

    /// Total bends across all runs
    pub bend_count: u32,

    /// Number of installers
    pub crew_size: NonZeroU32,

    /// Wage per crew-hour
    pub labor_rate_per_hour: f64,

    /// Labor difficulty
    pub complexity: ComplexityTier,

    /// Unit prices used for material cost
    pub prices: PriceTable,
}

impl Default for EstimateInput {
    fn default() -> Self {
        Self {
            footage_feet: 200.0,
            conduit_type: ConduitType::Emt,
            location: InstallLocation::Indoor,
            trade_size_inches: 0.75,
            bend_count: 6,
            crew_size: NonZeroU32::MIN.saturating_add(1),
            labor_rate_per_hour: 65.0,
            complexity: ComplexityTier::Standard,
            prices: PriceTable::reference(),
        }
    }
}

/// Material quantities for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialCounts {
    pub straps: u64,
    pub strap_packs: u64,
    pub pull_boxes: u64,
    pub connectors: u64,
    pub couplings: u64,
    pub elbows: u64,
    pub bushings: u64,
}

impl MaterialCounts {
    pub fn count(&self, material: Material) -> u64 {
        match material {
            Material::Strap => self.straps,
            Material::StrapPack => self.strap_packs,
            Material::PullBox => self.pull_boxes,
            Material::Connector => self.connectors,
            Material::Coupling => self.couplings,
            Material::Elbow => self.elbows,
            Material::Bushing => self.bushings,
        }
    }
}

/// Outcome of a single estimate
///
/// Money and hour figures are rounded to cents (scale 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub materials: MaterialCounts,
    pub material_cost: Decimal,
    pub total_labor_hours: Decimal,
    pub labor_hours_per_person: Decimal,
    pub labor_cost: Decimal,
    pub total_cost: Decimal,
}
