mod tax_rate;
mod tax_zone;
mod territory;

pub use tax_rate::{TaxRate, TaxRatePercentage};
pub use tax_zone::{RateSummary, TaxZone};
pub use territory::{PostalCodePattern, Territory};
