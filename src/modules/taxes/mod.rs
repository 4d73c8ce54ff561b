pub mod models;
pub mod plugins;
pub mod services;

pub use models::{DisplayLabel, PluginConfiguration, TaxTypeConfig};
pub use services::{
    LocalTaxType, RemoteTaxType, SourcingPolicy, TaxCalculator, TaxOrderProcessor, TaxType,
    TaxTypeRegistry,
};
