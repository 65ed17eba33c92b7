//! Unit price table and the materials it prices

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{EstimatorError, Result};

/// Highest unit price accepted, in dollars
pub const MAX_UNIT_PRICE: f64 = 1e6;

/// Materials counted by an estimate, in the order costs are summed and reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Strap,
    StrapPack,
    PullBox,
    Connector,
    Coupling,
    Elbow,
    Bushing,
}

impl Material {
    /// Every material, in cost-summation order
    pub const ALL: [Material; 7] = [
        Material::Strap,
        Material::StrapPack,
        Material::PullBox,
        Material::Connector,
        Material::Coupling,
        Material::Elbow,
        Material::Bushing,
    ];

    /// Key used in price files and config
    pub fn key(&self) -> &'static str {
        match self {
            Material::Strap => "strap",
            Material::StrapPack => "strap_pack",
            Material::PullBox => "pull_box",
            Material::Connector => "connector",
            Material::Coupling => "coupling",
            Material::Elbow => "elbow",
            Material::Bushing => "bushing",
        }
    }

    /// Line-item label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Material::Strap => "Straps",
            Material::StrapPack => "Strap Packs (10/pack)",
            Material::PullBox => "Pull Boxes",
            Material::Connector => "Connectors",
            Material::Coupling => "Couplings",
            Material::Elbow => "Elbows",
            Material::Bushing => "Bushings",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unit prices in dollars, one per [`Material`]
///
/// Every key is required when deserializing. camelCase keys are accepted
/// as aliases so price sheets exported from the web form load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub strap: f64,
    #[serde(alias = "strapPack")]
    pub strap_pack: f64,
    #[serde(alias = "pullBox")]
    pub pull_box: f64,
    pub connector: f64,
    pub coupling: f64,
    pub elbow: f64,
    pub bushing: f64,
}

impl PriceTable {
    /// The built-in reference prices
    pub const fn reference() -> Self {
        Self {
            strap: 0.42,
            strap_pack: 4.18,
            pull_box: 10.98,
            connector: 1.97,
            coupling: 0.90,
            elbow: 1.52,
            bushing: 0.55,
        }
    }

    /// Unit price for a material
    pub fn unit_price(&self, material: Material) -> f64 {
        match material {
            Material::Strap => self.strap,
            Material::StrapPack => self.strap_pack,
            Material::PullBox => self.pull_box,
            Material::Connector => self.connector,
            Material::Coupling => self.coupling,
            Material::Elbow => self.elbow,
            Material::Bushing => self.bushing,
        }
    }

    /// Check every price is finite and within `0..=MAX_UNIT_PRICE`
    pub fn validate(&self) -> Result<()> {
        for material in Material::ALL {
            let value = self.unit_price(material);
            if !value.is_finite() || !(0.0..=MAX_UNIT_PRICE).contains(&value) {
                return Err(EstimatorError::InvalidPrice {
                    material: material.key().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::reference()
    }
}
