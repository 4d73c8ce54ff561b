use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Price;

/// Adjustment categories an order item can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    Tax,
    Promotion,
    Fee,
    Shipping,
    Custom,
}

impl fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdjustmentType::Tax => "tax",
            AdjustmentType::Promotion => "promotion",
            AdjustmentType::Fee => "fee",
            AdjustmentType::Shipping => "shipping",
            AdjustmentType::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

/// A price modification attached to an order item.
///
/// Included adjustments are already part of the item's price (e.g. VAT in a
/// display-inclusive store) and are not added again when computing totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    #[serde(rename = "type")]
    pub adjustment_type: AdjustmentType,

    pub label: String,

    pub amount: Price,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,

    /// For tax: "{tax_type_id}|{zone_id}|{rate_id}"
    #[serde(default)]
    pub source_id: String,

    #[serde(default)]
    pub included: bool,
}

impl Adjustment {
    pub fn new(adjustment_type: AdjustmentType, label: impl Into<String>, amount: Price) -> Self {
        Self {
            adjustment_type,
            label: label.into(),
            amount,
            percentage: None,
            source_id: String::new(),
            included: false,
        }
    }

    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }

    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    pub fn included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    pub fn is_tax(&self) -> bool {
        self.adjustment_type == AdjustmentType::Tax
    }
}
