use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Price, Result, TaxError};

use super::{Adjustment, AdjustmentType};

/// How an order item type is classified for tax sourcing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxableType {
    #[default]
    PhysicalGoods,
    DigitalGoods,
}

/// A single purchased line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Order item bundle, e.g. "default" or "e_book"
    #[serde(default = "default_order_item_type")]
    pub order_item_type: String,

    /// Taxable classification configured on the order item type
    #[serde(default)]
    pub taxable_type: TaxableType,

    pub quantity: Decimal,

    pub unit_price: Price,

    /// Catalog price, recorded the first time tax processing changes `unit_price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_unit_price: Option<Price>,

    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

fn default_order_item_type() -> String {
    "default".to_string()
}

impl OrderItem {
    /// Create a new order item with validation
    pub fn new(id: impl Into<String>, quantity: Decimal, unit_price: Price) -> Result<Self> {
        if quantity <= Decimal::ZERO {
            return Err(TaxError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }

        Ok(Self {
            id: id.into(),
            title: String::new(),
            order_item_type: default_order_item_type(),
            taxable_type: TaxableType::default(),
            quantity,
            unit_price,
            original_unit_price: None,
            adjustments: Vec::new(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_taxable_type(mut self, taxable_type: TaxableType) -> Self {
        self.taxable_type = taxable_type;
        self
    }

    pub fn is_digital(&self) -> bool {
        self.taxable_type == TaxableType::DigitalGoods
    }

    /// Replace the unit price, keeping the catalog price for later passes
    pub fn set_unit_price(&mut self, unit_price: Price) {
        if self.original_unit_price.is_none() {
            self.original_unit_price = Some(self.unit_price);
        }
        self.unit_price = unit_price;
    }

    /// Put the catalog price back before recalculating taxes
    pub fn restore_unit_price(&mut self) {
        if let Some(original) = self.original_unit_price {
            self.unit_price = original;
        }
    }

    /// Unit price × quantity, rounded to the currency
    pub fn total_price(&self) -> Price {
        self.unit_price.multiply(self.quantity).round()
    }

    /// Total price plus every non-included adjustment of the given types
    pub fn adjusted_total_price(&self, adjustment_types: &[AdjustmentType]) -> Result<Price> {
        let mut adjusted = self.total_price();
        for adjustment in self
            .adjustments
            .iter()
            .filter(|a| adjustment_types.contains(&a.adjustment_type))
        {
            if !adjustment.included {
                adjusted = adjusted.add(&adjustment.amount)?;
            }
        }
        Ok(adjusted.round())
    }

    pub fn add_adjustment(&mut self, adjustment: Adjustment) {
        self.adjustments.push(adjustment);
    }

    pub fn adjustments_of_type(&self, adjustment_type: AdjustmentType) -> Vec<&Adjustment> {
        self.adjustments
            .iter()
            .filter(|a| a.adjustment_type == adjustment_type)
            .collect()
    }

    pub fn remove_adjustments_of_type(&mut self, adjustment_type: AdjustmentType) {
        self.adjustments
            .retain(|a| a.adjustment_type != adjustment_type);
    }
}
