//! Chart calculation settings.

use std::path::Path;

use jyotish_ephem::Precision;
use jyotish_vedic::{AyanamshaSystem, DoshaBasis, NodeMode};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Settings shared by natal charts and daily contexts.
///
/// Every field has a default, so a TOML file only names what it changes:
///
/// ```toml
/// precision = "fast"
/// ayanamsha = "fagan_bradley"
/// node_mode = "true"
/// dosha_basis = "graha"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// How much of each longitude series to evaluate.
    pub precision: Precision,
    /// Sidereal reference system.
    pub ayanamsha: AyanamshaSystem,
    /// Mean or true lunar nodes.
    pub node_mode: NodeMode,
    /// Whether natal charts include a dosha balance.
    pub dosha: bool,
    /// Element source for the dosha tally.
    pub dosha_basis: DoshaBasis,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            precision: Precision::Standard,
            ayanamsha: AyanamshaSystem::Lahiri,
            node_mode: NodeMode::Mean,
            dosha: true,
            dosha_basis: DoshaBasis::Rashi,
        }
    }
}

impl ChartConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded chart config from {}: {config:?}", path.display());
        Ok(config)
    }
}
