use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Currency, Result, TaxError};

/// A monetary amount in a single currency
///
/// All arithmetic between two prices is checked: mixing currencies
/// returns `TaxError::CurrencyMismatch` instead of silently converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub number: Decimal,
    pub currency_code: Currency,
}

impl Price {
    pub fn new(number: Decimal, currency_code: Currency) -> Self {
        Self {
            number,
            currency_code,
        }
    }

    pub fn zero(currency_code: Currency) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    pub fn add(&self, other: &Price) -> Result<Price> {
        self.ensure_same_currency(other)?;
        Ok(Price::new(self.number + other.number, self.currency_code))
    }

    pub fn subtract(&self, other: &Price) -> Result<Price> {
        self.ensure_same_currency(other)?;
        Ok(Price::new(self.number - other.number, self.currency_code))
    }

    pub fn multiply(&self, factor: Decimal) -> Price {
        Price::new(self.number * factor, self.currency_code)
    }

    /// Divides the amount, rejecting a zero divisor
    pub fn divide(&self, divisor: Decimal) -> Result<Price> {
        if divisor.is_zero() {
            return Err(TaxError::validation("Cannot divide a price by zero"));
        }
        Ok(Price::new(self.number / divisor, self.currency_code))
    }

    /// Rounds to the minor unit of the price's currency
    pub fn round(&self) -> Price {
        Price::new(self.currency_code.round(self.number), self.currency_code)
    }

    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    fn ensure_same_currency(&self, other: &Price) -> Result<()> {
        if self.currency_code != other.currency_code {
            return Err(TaxError::currency_mismatch(
                self.currency_code,
                other.currency_code,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.currency_code.format_amount(self.number))
    }
}
