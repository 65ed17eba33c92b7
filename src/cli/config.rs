//! Configuration management for conduit-estimator
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.conduit-estimator/config.toml

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use crate::cli::args::Verbosity;
use crate::errors::{EstimatorError, Result};
use crate::estimator::{ComplexityTier, ConduitType, EstimateInput, InstallLocation};
use crate::pricing::{FilePriceProvider, PriceProvider, PriceTable, StaticPriceProvider};
use crate::report::OutputFormat;
use crate::validation::validate_input;

/// Complete configuration for conduit-estimator
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub job: JobConfig,
    pub prices: PriceTable,
    pub pricing: PricingConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

/// Default job parameters used when a flag is omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub footage_feet: f64,
    pub conduit_type: ConduitType,
    pub location: InstallLocation,
    pub trade_size_inches: f64,
    pub bend_count: u32,
    pub crew_size: NonZeroU32,
    pub labor_rate_per_hour: f64,
    pub complexity: ComplexityTier,
}

/// Where prices come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price sheet path; overrides `[prices]` when set
    pub source: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub default_verbosity: String,
}

impl Default for JobConfig {
    fn default() -> Self {
        let input = EstimateInput::default();
        Self {
            footage_feet: input.footage_feet,
            conduit_type: input.conduit_type,
            location: input.location,
            trade_size_inches: input.trade_size_inches,
            bend_count: input.bend_count,
            crew_size: input.crew_size,
            labor_rate_per_hour: input.labor_rate_per_hour,
            complexity: input.complexity,
        }
    }
}

impl JobConfig {
    /// Estimate input for the configured job with the given prices
    pub fn to_input(&self, prices: PriceTable) -> EstimateInput {
        EstimateInput {
            footage_feet: self.footage_feet,
            conduit_type: self.conduit_type,
            location: self.location,
            trade_size_inches: self.trade_size_inches,
            bend_count: self.bend_count,
            crew_size: self.crew_size,
            labor_rate_per_hour: self.labor_rate_per_hour,
            complexity: self.complexity,
            prices,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color_output: true,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| {
                EstimatorError::ConfigError(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".conduit-estimator").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.job.to_input(self.prices))
            .map_err(|e| EstimatorError::ConfigError(format!("Invalid job defaults: {}", e)))?;

        if let Some(source) = &self.pricing.source {
            if source.trim().is_empty() {
                return Err(EstimatorError::ConfigError(
                    "pricing.source must not be empty".to_string(),
                ));
            }
        }

        if Verbosity::parse(&self.telemetry.default_verbosity).is_none() {
            return Err(EstimatorError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.telemetry.default_verbosity
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EstimatorError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| {
                EstimatorError::ConfigError(format!(
                    "Failed to write config {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(())
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Configured default verbosity
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::parse(&self.telemetry.default_verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Price provider for this configuration
    ///
    /// Precedence: explicit `override_path`, then `pricing.source`, then the
    /// `[prices]` table.
    pub fn price_provider(&self, override_path: Option<&Path>) -> Box<dyn PriceProvider> {
        if let Some(path) = override_path {
            return Box::new(FilePriceProvider::new(path));
        }
        if let Some(source) = &self.pricing.source {
            return Box::new(FilePriceProvider::new(Self::expand_path(source)));
        }
        if self.prices == PriceTable::reference() {
            Box::new(StaticPriceProvider::reference())
        } else {
            Box::new(StaticPriceProvider::new("config", self.prices))
        }
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }
}
