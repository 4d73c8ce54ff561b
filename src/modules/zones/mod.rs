//! Geographic tax zones: territories, rates and their dated percentages.

pub mod models;

pub use models::{PostalCodePattern, RateSummary, TaxRate, TaxRatePercentage, TaxZone, Territory};
