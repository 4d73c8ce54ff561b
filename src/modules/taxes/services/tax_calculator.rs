use rust_decimal::Decimal;

use crate::core::{Price, Result, TaxError};

/// Maximum number of decimal places a percentage may carry (e.g. 0.09975)
const MAX_PERCENTAGE_SCALE: u32 = 6;

/// TaxCalculator turns a price and a percentage into a tax amount
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the tax amount for a price
    ///
    /// - exclusive: `amount = price × percentage`
    /// - inclusive: `amount = price - price / (1 + percentage)`, i.e. the
    ///   tax already embedded in the price
    ///
    /// The result is not rounded; callers round exactly once, when they know
    /// whether the amount is final.
    pub fn calculate_tax_amount(
        &self,
        price: &Price,
        percentage: Decimal,
        included: bool,
    ) -> Result<Price> {
        self.validate_percentage(percentage)?;

        if included {
            let net = price.divide(Decimal::ONE + percentage)?;
            return price.subtract(&net);
        }

        Ok(price.multiply(percentage))
    }

    /// Same as [`calculate_tax_amount`](Self::calculate_tax_amount), rounded
    /// to the currency's minor unit when `round` is set
    pub fn calculate_rounded(
        &self,
        price: &Price,
        percentage: Decimal,
        included: bool,
        round: bool,
    ) -> Result<Price> {
        let amount = self.calculate_tax_amount(price, percentage, included)?;
        Ok(if round { amount.round() } else { amount })
    }

    /// Unit price with tax added on top (tax amount rounded first)
    pub fn price_with_tax(&self, price: &Price, percentage: Decimal) -> Result<Price> {
        let tax_amount = self.calculate_rounded(price, percentage, false, true)?;
        price.add(&tax_amount)
    }

    /// Unit price with the embedded tax backed out (tax amount rounded first)
    pub fn price_without_tax(&self, price: &Price, percentage: Decimal) -> Result<Price> {
        let tax_amount = self.calculate_rounded(price, percentage, true, true)?;
        price.subtract(&tax_amount)
    }

    /// Validate percentage is within acceptable range (0-1.0) with max 6 decimal places
    pub fn validate_percentage(&self, percentage: Decimal) -> Result<()> {
        if percentage < Decimal::ZERO {
            return Err(TaxError::validation("Tax percentage cannot be negative"));
        }

        if percentage > Decimal::ONE {
            return Err(TaxError::validation(
                "Tax percentage cannot exceed 1.0 (100%)",
            ));
        }

        if percentage.normalize().scale() > MAX_PERCENTAGE_SCALE {
            return Err(TaxError::validation(format!(
                "Tax percentage cannot have more than {} decimal places",
                MAX_PERCENTAGE_SCALE
            )));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
