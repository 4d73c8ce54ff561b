use serde::{Deserialize, Serialize};

/// Postal address, reduced to the fields tax matching looks at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ISO 3166-1 alpha-2 code, e.g. "DE"
    pub country_code: String,

    /// Province/state code, e.g. "QC" for Quebec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            ..Default::default()
        }
    }

    pub fn with_administrative_area(mut self, area: impl Into<String>) -> Self {
        self.administrative_area = Some(area.into());
        self
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Postal code as matched against territory rules; missing codes match as ""
    pub fn postal_code_or_empty(&self) -> &str {
        self.postal_code.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.country_code.trim().is_empty()
    }
}
