use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::zones::Territory;

/// Label shown to customers on tax adjustments of a custom tax type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayLabel {
    #[default]
    Tax,
    Vat,
    Gst,
    Hst,
    Pst,
    Qst,
    Iva,
    SalesTax,
    ConsumptionTax,
}

impl DisplayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLabel::Tax => "Tax",
            DisplayLabel::Vat => "VAT",
            DisplayLabel::Gst => "GST",
            DisplayLabel::Hst => "HST",
            DisplayLabel::Pst => "PST",
            DisplayLabel::Qst => "QST",
            DisplayLabel::Iva => "IVA",
            DisplayLabel::SalesTax => "Sales tax",
            DisplayLabel::ConsumptionTax => "Consumption tax",
        }
    }
}

impl fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-defined rate of the custom tax type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRateConfig {
    pub id: String,
    pub label: String,
    pub percentage: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub default: bool,
}

/// Plugin-specific settings of a tax type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfiguration {
    /// Overrides the plugin's own inclusive/exclusive default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_inclusive: Option<bool>,

    /// Round tax amounts per order item; only the custom plugin reads this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_label: Option<DisplayLabel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rates: Vec<CustomRateConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub territories: Vec<Territory>,

    /// Accept EU VAT numbers whose verification has not completed
    #[serde(default)]
    pub allow_unverified_tax_numbers: bool,
}

/// A configured tax type: which plugin to run and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTypeConfig {
    pub id: String,

    pub label: String,

    /// Registry key, e.g. "european_union_vat"
    pub plugin: String,

    #[serde(default = "enabled")]
    pub status: bool,

    #[serde(default)]
    pub configuration: PluginConfiguration,
}

fn enabled() -> bool {
    true
}

impl TaxTypeConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            plugin: plugin.into(),
            status: true,
            configuration: PluginConfiguration::default(),
        }
    }

    pub fn with_configuration(mut self, configuration: PluginConfiguration) -> Self {
        self.configuration = configuration;
        self
    }
}
