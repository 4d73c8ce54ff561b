use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies with their minor-unit precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Bulgarian Lev
    BGN,
    /// Canadian Dollar
    CAD,
    /// Swiss Franc
    CHF,
    /// Czech Koruna
    CZK,
    /// Danish Krone
    DKK,
    /// Euro
    EUR,
    /// Pound Sterling
    GBP,
    /// Hungarian Forint
    HUF,
    /// Japanese Yen (no decimal places)
    JPY,
    /// Norwegian Krone
    NOK,
    /// Polish Zloty
    PLN,
    /// Romanian Leu
    RON,
    /// Swedish Krona
    SEK,
    /// US Dollar
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - JPY: 0 (no decimals)
    /// - everything else: 2
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Returns the smallest unit for this currency
    pub fn smallest_unit(&self) -> Decimal {
        Decimal::new(1, self.scale())
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        let scale = self.scale();
        if scale == 0 {
            format!("{} {}", self, amount.round_dp(0))
        } else {
            format!("{} {:.width$}", self, amount, width = scale as usize)
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::BGN => "BGN",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::CZK => "CZK",
            Currency::DKK => "DKK",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::HUF => "HUF",
            Currency::JPY => "JPY",
            Currency::NOK => "NOK",
            Currency::PLN => "PLN",
            Currency::RON => "RON",
            Currency::SEK => "SEK",
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BGN" => Ok(Currency::BGN),
            "CAD" => Ok(Currency::CAD),
            "CHF" => Ok(Currency::CHF),
            "CZK" => Ok(Currency::CZK),
            "DKK" => Ok(Currency::DKK),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "HUF" => Ok(Currency::HUF),
            "JPY" => Ok(Currency::JPY),
            "NOK" => Ok(Currency::NOK),
            "PLN" => Ok(Currency::PLN),
            "RON" => Ok(Currency::RON),
            "SEK" => Ok(Currency::SEK),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
