use serde::{Deserialize, Serialize};

use super::Address;

/// Outcome of checking a tax number against its issuing authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    Success,
    Failure,
    Unknown,
}

/// A customer-supplied tax identifier (VAT number, GST number, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxNumber {
    /// Number scheme, e.g. "european_union_vat" or "other"
    #[serde(rename = "type")]
    pub number_type: String,

    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_state: Option<VerificationState>,
}

impl TaxNumber {
    pub fn new(number_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            number_type: number_type.into(),
            value: value.into(),
            verification_state: None,
        }
    }

    pub fn verified(mut self, state: VerificationState) -> Self {
        self.verification_state = Some(state);
        self
    }

    pub fn is_verified(&self) -> bool {
        self.verification_state == Some(VerificationState::Success)
    }
}

/// Stored customer profile (shipping or billing) as collected by checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<TaxNumber>,
}

impl Profile {
    pub fn with_address(address: Address) -> Self {
        Self {
            address: Some(address),
            tax_number: None,
        }
    }

    pub fn with_tax_number(mut self, tax_number: TaxNumber) -> Self {
        self.tax_number = Some(tax_number);
        self
    }

    /// The address, if present and non-blank
    pub fn usable_address(&self) -> Option<&Address> {
        self.address.as_ref().filter(|address| !address.is_empty())
    }
}

/// Transient profile the tax engine computes against.
///
/// Unlike [`Profile`] the address is mandatory: without one there is
/// nothing to match zones against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    pub address: Address,
    pub tax_number: Option<TaxNumber>,
}

impl CustomerProfile {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            tax_number: None,
        }
    }

    pub fn with_tax_number(mut self, tax_number: TaxNumber) -> Self {
        self.tax_number = Some(tax_number);
        self
    }
}
