use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{date::date, Price, Result, TaxError};
use crate::modules::taxes::services::TaxCalculator;

/// A percentage valid over a range of calendar days.
///
/// Both `start_date` and `end_date` are inclusive; a missing end date means
/// the percentage is still in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRatePercentage {
    pub number: Decimal,

    pub start_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl TaxRatePercentage {
    pub fn new(number: Decimal, start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            number,
            start_date,
            end_date,
        }
    }

    /// Shorthand for the built-in tables: `("0.19", "2007-01-01", None)`
    pub fn from_literals(number: &str, start: &str, end: Option<&str>) -> Result<Self> {
        let number = number.parse::<Decimal>().map_err(|e| {
            TaxError::configuration(format!("Invalid percentage '{}': {}", number, e))
        })?;
        Ok(Self::new(number, date(start)?, end.map(date).transpose()?))
    }

    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && self.end_date.map_or(true, |end| day <= end)
    }

    /// Tax amount for the given price at this percentage (unrounded)
    pub fn calculate_tax_amount(&self, price: &Price, included: bool) -> Result<Price> {
        TaxCalculator::new().calculate_tax_amount(price, self.number, included)
    }
}

/// A named rate within a zone ("standard", "reduced", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: String,

    pub label: String,

    pub percentages: Vec<TaxRatePercentage>,

    #[serde(default)]
    pub default: bool,
}

impl TaxRate {
    /// Build a validated rate; percentages are sorted by start date
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        percentages: Vec<TaxRatePercentage>,
    ) -> Result<Self> {
        let mut rate = Self {
            id: id.into(),
            label: label.into(),
            percentages,
            default: false,
        };
        rate.validate()?;
        Ok(rate)
    }

    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    /// The percentage in effect on `day`, if any
    pub fn percentage_on(&self, day: NaiveDate) -> Option<&TaxRatePercentage> {
        self.percentages.iter().find(|p| p.is_active_on(day))
    }

    /// Sort percentages chronologically and reject overlapping intervals
    pub fn validate(&mut self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TaxError::configuration("Tax rate id cannot be empty"));
        }
        if self.percentages.is_empty() {
            return Err(TaxError::configuration(format!(
                "Tax rate '{}' has no percentages",
                self.id
            )));
        }

        let calculator = TaxCalculator::new();
        for percentage in &self.percentages {
            calculator
                .validate_percentage(percentage.number)
                .map_err(|e| {
                    TaxError::configuration(format!("Tax rate '{}': {}", self.id, e))
                })?;
            if let Some(end) = percentage.end_date {
                if end < percentage.start_date {
                    return Err(TaxError::configuration(format!(
                        "Tax rate '{}' has a percentage ending ({}) before it starts ({})",
                        self.id, end, percentage.start_date
                    )));
                }
            }
        }

        self.percentages.sort_by_key(|p| p.start_date);
        for pair in self.percentages.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            let overlaps = match previous.end_date {
                None => true,
                Some(end) => next.start_date <= end,
            };
            if overlaps {
                return Err(TaxError::configuration(format!(
                    "Tax rate '{}' has overlapping percentages starting {} and {}",
                    self.id, previous.start_date, next.start_date
                )));
            }
        }

        Ok(())
    }
}
