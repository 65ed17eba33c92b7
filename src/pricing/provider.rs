//! Price sources
//!
//! A [`PriceProvider`] is asked for prices once, at startup; the estimator
//! only ever receives the resulting [`PriceTable`] value.

use std::path::{Path, PathBuf};

use crate::errors::{EstimatorError, Result};
use crate::pricing::table::PriceTable;

/// Source of the current unit price table
pub trait PriceProvider {
    /// Short name used in logs and the `prices` listing
    fn name(&self) -> &str;

    /// Fetch the latest prices. Implementations return validated tables.
    fn latest_prices(&self) -> Result<PriceTable>;
}

/// Provider backed by a fixed table
#[derive(Debug, Clone)]
pub struct StaticPriceProvider {
    name: String,
    table: PriceTable,
}

impl StaticPriceProvider {
    pub fn new(name: impl Into<String>, table: PriceTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// The built-in reference price list
    pub fn reference() -> Self {
        Self::new("reference", PriceTable::reference())
    }
}

impl PriceProvider for StaticPriceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn latest_prices(&self) -> Result<PriceTable> {
        self.table.validate()?;
        Ok(self.table)
    }
}

/// Provider reading a price sheet from disk
///
/// `.json` files are parsed as JSON, anything else as TOML. The file is
/// re-read on every call.
#[derive(Debug, Clone)]
pub struct FilePriceProvider {
    path: PathBuf,
    name: String,
}

impl FilePriceProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

impl PriceProvider for FilePriceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn latest_prices(&self) -> Result<PriceTable> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            EstimatorError::PriceSourceError(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let table: PriceTable = if self.is_json() {
            serde_json::from_str(&contents).map_err(|e| {
                EstimatorError::PriceSourceError(format!(
                    "Failed to parse {}: {}",
                    self.path.display(),
                    e
                ))
            })?
        } else {
            toml::from_str(&contents).map_err(|e| {
                EstimatorError::PriceSourceError(format!(
                    "Failed to parse {}: {}",
                    self.path.display(),
                    e
                ))
            })?
        };

        table.validate()?;
        tracing::info!(source = %self.path.display(), "Loaded price table from file");
        Ok(table)
    }
}

/// Provider wrapping a plain function or closure
pub struct FnPriceProvider<F> {
    name: String,
    fetch: F,
}

impl<F> FnPriceProvider<F>
where
    F: Fn() -> Result<PriceTable>,
{
    pub fn new(name: impl Into<String>, fetch: F) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }
}

impl<F> PriceProvider for FnPriceProvider<F>
where
    F: Fn() -> Result<PriceTable>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn latest_prices(&self) -> Result<PriceTable> {
        let table = (self.fetch)()?;
        table.validate()?;
        Ok(table)
    }
}
