mod tax_type_config;

pub use tax_type_config::{CustomRateConfig, DisplayLabel, PluginConfiguration, TaxTypeConfig};
