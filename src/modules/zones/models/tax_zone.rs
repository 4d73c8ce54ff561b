use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::core::{Result, TaxError};
use crate::modules::customers::Address;

use super::{TaxRate, Territory};

/// A rate and the percentage it carries on a given day, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateSummary {
    pub rate_id: String,
    pub label: String,
    pub percentage: Option<Decimal>,
    pub default: bool,
}

/// Territories sharing one set of tax rates (e.g. "Germany").
///
/// Zones are validated when built and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxZone {
    id: String,
    label: String,
    display_label: String,
    territories: Vec<Territory>,
    rates: Vec<TaxRate>,
    #[serde(skip)]
    default_rate: usize,
}

impl TaxZone {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        display_label: impl Into<String>,
        territories: Vec<Territory>,
        mut rates: Vec<TaxRate>,
    ) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TaxError::configuration("Tax zone id cannot be empty"));
        }
        if territories.is_empty() {
            return Err(TaxError::configuration(format!(
                "Tax zone '{}' has no territories",
                id
            )));
        }
        if rates.is_empty() {
            return Err(TaxError::configuration(format!(
                "Tax zone '{}' has no rates",
                id
            )));
        }

        let mut seen = HashSet::new();
        for rate in rates.iter_mut() {
            rate.validate()?;
            if !seen.insert(rate.id.clone()) {
                return Err(TaxError::configuration(format!(
                    "Tax zone '{}' defines rate '{}' more than once",
                    id, rate.id
                )));
            }
        }

        let defaults: Vec<usize> = rates
            .iter()
            .enumerate()
            .filter(|(_, rate)| rate.default)
            .map(|(idx, _)| idx)
            .collect();
        let default_rate = match defaults.as_slice() {
            [single] => *single,
            [] => {
                return Err(TaxError::configuration(format!(
                    "Tax zone '{}' has no default rate",
                    id
                )))
            }
            _ => {
                return Err(TaxError::configuration(format!(
                    "Tax zone '{}' has {} default rates, expected exactly one",
                    id,
                    defaults.len()
                )))
            }
        };

        Ok(Self {
            id,
            label: label.into(),
            display_label: display_label.into(),
            territories,
            rates,
            default_rate,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label shown on the tax adjustment, e.g. "VAT" or "GST"
    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn rates(&self) -> &[TaxRate] {
        &self.rates
    }

    /// True if any territory contains the address
    pub fn matches(&self, address: &Address) -> bool {
        self.territories.iter().any(|t| t.matches(address))
    }

    pub fn rate(&self, rate_id: &str) -> Result<&TaxRate> {
        self.rates
            .iter()
            .find(|rate| rate.id == rate_id)
            .ok_or_else(|| {
                TaxError::not_found(format!("Rate '{}' in tax zone '{}'", rate_id, self.id))
            })
    }

    pub fn default_rate(&self) -> &TaxRate {
        &self.rates[self.default_rate]
    }

    /// Each rate with the percentage in effect on `day`
    pub fn rates_summary(&self, day: NaiveDate) -> Vec<RateSummary> {
        self.rates
            .iter()
            .map(|rate| RateSummary {
                rate_id: rate.id.clone(),
                label: rate.label.clone(),
                percentage: rate.percentage_on(day).map(|p| p.number),
                default: rate.default,
            })
            .collect()
    }
}
