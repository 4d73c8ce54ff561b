use serde::{Deserialize, Serialize};

use crate::core::Currency;
use crate::modules::customers::Address;

/// The selling store, as seen by tax calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub address: Address,

    pub default_currency: Currency,

    /// Whether catalog prices are entered with tax included
    #[serde(default)]
    pub prices_include_tax: bool,

    /// Jurisdictions where the store is registered to collect tax: a country
    /// code (`DE`) or country plus administrative area (`CA-QC`)
    #[serde(default)]
    pub tax_registrations: Vec<String>,
}

impl Store {
    pub fn new(id: impl Into<String>, address: Address, default_currency: Currency) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            address,
            default_currency,
            prices_include_tax: false,
            tax_registrations: Vec::new(),
        }
    }

    pub fn with_prices_including_tax(mut self, prices_include_tax: bool) -> Self {
        self.prices_include_tax = prices_include_tax;
        self
    }

    pub fn with_tax_registrations<I, S>(mut self, registrations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tax_registrations = registrations.into_iter().map(Into::into).collect();
        self
    }

    /// Registrations as addresses, for zone matching
    pub fn registration_addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.tax_registrations
            .iter()
            .filter_map(|code| registration_address(code))
    }
}

fn registration_address(code: &str) -> Option<Address> {
    let code = code.trim().to_uppercase();
    let (country, area) = match code.split_once('-') {
        Some((country, area)) => (country, Some(area)),
        None => (code.as_str(), None),
    };
    if country.is_empty() || area.is_some_and(str::is_empty) {
        return None;
    }

    let address = Address::new(country);
    Some(match area {
        Some(area) => address.with_administrative_area(area),
        None => address,
    })
}
