use std::collections::BTreeMap;
use tracing::info;

use crate::config::TaxSettings;
use crate::core::{Result, TaxError};
use crate::modules::taxes::models::TaxTypeConfig;
use crate::modules::taxes::plugins::{
    canadian_sales_tax, custom, european_union_vat, norwegian_vat, swiss_vat,
};

use super::TaxType;

/// Builds a tax type from its configuration
pub type TaxTypeConstructor = Box<dyn Fn(&TaxTypeConfig) -> Result<Box<dyn TaxType>> + Send + Sync>;

/// Plugin id → constructor, populated once at startup
pub struct TaxTypeRegistry {
    constructors: BTreeMap<String, TaxTypeConstructor>,
}

impl TaxTypeRegistry {
    /// An empty registry, without the built-in plugins
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// A registry with every built-in plugin registered
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(canadian_sales_tax::PLUGIN_ID, |config| {
            Ok(Box::new(canadian_sales_tax::create(config)?))
        });
        registry.register(custom::PLUGIN_ID, |config| Ok(Box::new(custom::create(config)?)));
        registry.register(european_union_vat::PLUGIN_ID, |config| {
            Ok(Box::new(european_union_vat::create(config)?))
        });
        registry.register(norwegian_vat::PLUGIN_ID, |config| {
            Ok(Box::new(norwegian_vat::create(config)?))
        });
        registry.register(swiss_vat::PLUGIN_ID, |config| {
            Ok(Box::new(swiss_vat::create(config)?))
        });
        registry
    }

    /// Register (or replace) the constructor for a plugin id
    pub fn register<F>(&mut self, plugin_id: impl Into<String>, constructor: F)
    where
        F: Fn(&TaxTypeConfig) -> Result<Box<dyn TaxType>> + Send + Sync + 'static,
    {
        self.constructors
            .insert(plugin_id.into(), Box::new(constructor));
    }

    pub fn contains(&self, plugin_id: &str) -> bool {
        self.constructors.contains_key(plugin_id)
    }

    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn create(&self, config: &TaxTypeConfig) -> Result<Box<dyn TaxType>> {
        let constructor = self.constructors.get(&config.plugin).ok_or_else(|| {
            TaxError::configuration(format!(
                "Tax type '{}' uses unknown plugin '{}'",
                config.id, config.plugin
            ))
        })?;
        constructor(config)
    }

    /// Build every enabled tax type, in settings order
    pub fn build_all(&self, settings: &TaxSettings) -> Result<Vec<Box<dyn TaxType>>> {
        let tax_types = settings
            .enabled()
            .map(|config| self.create(config))
            .collect::<Result<Vec<_>>>()?;
        info!("Built {} tax types", tax_types.len());
        Ok(tax_types)
    }
}

impl Default for TaxTypeRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
