use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::modules::customers::models::{TaxNumber, VerificationState};

pub const EUROPEAN_UNION_VAT: &str = "european_union_vat";

/// Body formats for EU VAT numbers, keyed by their two-letter VAT prefix
static EU_VAT_FORMATS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    [
        ("AT", r"^U\d{8}$"),
        ("BE", r"^[01]\d{9}$"),
        ("BG", r"^\d{9,10}$"),
        ("CY", r"^\d{8}[A-Z]$"),
        ("CZ", r"^\d{8,10}$"),
        ("DE", r"^\d{9}$"),
        ("DK", r"^\d{8}$"),
        ("EE", r"^\d{9}$"),
        ("EL", r"^\d{9}$"),
        ("ES", r"^[A-Z0-9]\d{7}[A-Z0-9]$"),
        ("FI", r"^\d{8}$"),
        ("FR", r"^[A-HJ-NP-Z0-9]{2}\d{9}$"),
        ("HR", r"^\d{11}$"),
        ("HU", r"^\d{8}$"),
        ("IE", r"^(\d{7}[A-W][A-I]?|\d[A-Z+*]\d{5}[A-W])$"),
        ("IT", r"^\d{11}$"),
        ("LT", r"^(\d{9}|\d{12})$"),
        ("LU", r"^\d{8}$"),
        ("LV", r"^\d{11}$"),
        ("MT", r"^\d{8}$"),
        ("NL", r"^\d{9}B\d{2}$"),
        ("PL", r"^\d{10}$"),
        ("PT", r"^\d{9}$"),
        ("RO", r"^\d{2,10}$"),
        ("SE", r"^\d{12}$"),
        ("SI", r"^\d{8}$"),
        ("SK", r"^\d{10}$"),
    ]
    .into_iter()
    .map(|(prefix, pattern)| {
        (
            prefix,
            Regex::new(pattern).expect("Failed to compile EU VAT number format"),
        )
    })
    .collect()
});

/// Decides whether a customer tax number may be relied upon
pub trait TaxNumberValidator: Send + Sync + fmt::Debug {
    /// The number scheme this validator understands
    fn number_type(&self) -> &str;

    /// Whether the number is usable; rejected numbers are treated as absent
    fn is_valid(&self, tax_number: &TaxNumber) -> bool;
}

/// Normalize a VAT number: uppercase, no spaces, dots or dashes
pub fn normalize_vat_number(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Checks the format of an EU VAT number, returning (prefix, body) when valid
pub fn parse_eu_vat_number(value: &str) -> Option<(String, String)> {
    let normalized = normalize_vat_number(value);
    if normalized.len() < 3 || !normalized.is_char_boundary(2) {
        return None;
    }
    let (prefix, body) = normalized.split_at(2);
    let format = EU_VAT_FORMATS.get(prefix)?;
    if format.is_match(body) {
        Some((prefix.to_string(), body.to_string()))
    } else {
        None
    }
}

/// Accepts well-formed EU VAT numbers that passed verification
#[derive(Debug, Clone, Default)]
pub struct EuropeanUnionVatNumberValidator {
    /// Accept numbers whose verification is still pending (not failed)
    pub allow_unverified: bool,
}

impl EuropeanUnionVatNumberValidator {
    pub fn new(allow_unverified: bool) -> Self {
        Self { allow_unverified }
    }
}

impl TaxNumberValidator for EuropeanUnionVatNumberValidator {
    fn number_type(&self) -> &str {
        EUROPEAN_UNION_VAT
    }

    fn is_valid(&self, tax_number: &TaxNumber) -> bool {
        if tax_number.number_type != EUROPEAN_UNION_VAT {
            return false;
        }
        if parse_eu_vat_number(&tax_number.value).is_none() {
            return false;
        }
        if tax_number.is_verified() {
            return true;
        }
        self.allow_unverified && tax_number.verification_state != Some(VerificationState::Failure)
    }
}
