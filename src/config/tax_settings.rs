use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::{Result, TaxError};
use crate::modules::taxes::models::TaxTypeConfig;

/// The configured tax types, as stored in `tax_types.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSettings {
    #[serde(default)]
    pub tax_types: Vec<TaxTypeConfig>,
}

impl TaxSettings {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let settings: TaxSettings = serde_yaml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading tax settings");
        let source = fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// Tax types whose status is enabled, in file order
    pub fn enabled(&self) -> impl Iterator<Item = &TaxTypeConfig> {
        self.tax_types.iter().filter(|config| config.status)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for config in &self.tax_types {
            if config.id.trim().is_empty() {
                return Err(TaxError::configuration("Tax type id cannot be empty"));
            }
            if !seen.insert(config.id.as_str()) {
                return Err(TaxError::configuration(format!(
                    "Tax type '{}' is configured more than once",
                    config.id
                )));
            }
        }
        Ok(())
    }
}
