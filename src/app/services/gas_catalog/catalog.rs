//! Catalog registry with lookup and TOML loading

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::defaults;
use crate::app::models::{GasInfo, ObservationRecord};
use crate::{Error, Result};

/// Ordered registry of known greenhouse gases
#[derive(Debug, Clone, PartialEq)]
pub struct GasCatalog {
    gases: Vec<GasInfo>,
}

/// On-disk shape of a catalog override file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    gases: Vec<GasInfo>,
}

impl GasCatalog {
    /// The built-in catalog: CO2 and N2O with live NOAA feeds, the other
    /// four gases with embedded sample series
    pub fn builtin() -> Self {
        Self {
            gases: defaults::builtin_gases(),
        }
    }

    /// Load a catalog from a TOML override file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading gas catalog from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read catalog {}", path.display()), e))?;

        Self::from_toml_str(&content)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        if file.gases.is_empty() {
            return Err(Error::catalog("Catalog file declares no gases", None));
        }

        debug!("Catalog loaded with {} gases", file.gases.len());
        Ok(Self { gases: file.gases })
    }

    /// Look up a gas by id, case-insensitively
    pub fn get(&self, gas_id: &str) -> Result<&GasInfo> {
        self.gases
            .iter()
            .find(|g| g.id.eq_ignore_ascii_case(gas_id))
            .ok_or_else(|| Error::gas_not_found(gas_id))
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &GasInfo> {
        self.gases.iter()
    }

    /// Number of catalogued gases
    pub fn len(&self) -> usize {
        self.gases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gases.is_empty()
    }

    /// Materialize a gas's embedded sample series, if it has one
    pub fn sample_series(&self, gas_id: &str) -> Result<Option<Vec<ObservationRecord>>> {
        let gas = self.get(gas_id)?;
        Ok(match &gas.source {
            crate::app::models::GasSource::Sample { series } => {
                Some(series.iter().map(|p| p.to_record()).collect())
            }
            crate::app::models::GasSource::Feed { .. } => None,
        })
    }
}

impl Default for GasCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
