//! Small constructors for the built-in zone tables.

use crate::core::Result;
use crate::modules::zones::{TaxRate, TaxRatePercentage, TaxZone, Territory};

/// `(number, start_date, end_date)` as written in the tables
pub(crate) type PercentageRow = (&'static str, &'static str, Option<&'static str>);

pub(crate) fn rate(id: &str, label: &str, rows: &[PercentageRow]) -> Result<TaxRate> {
    let percentages = rows
        .iter()
        .map(|(number, start, end)| TaxRatePercentage::from_literals(number, start, *end))
        .collect::<Result<Vec<_>>>()?;
    TaxRate::new(id, label, percentages)
}

pub(crate) fn zone(
    id: &str,
    label: &str,
    display_label: &str,
    territories: Vec<Territory>,
    rates: Vec<TaxRate>,
) -> Result<TaxZone> {
    TaxZone::new(id, label, display_label, territories, rates)
}

/// A zone covering one whole country
pub(crate) fn country_zone(
    id: &str,
    label: &str,
    display_label: &str,
    country_code: &str,
    rates: Vec<TaxRate>,
) -> Result<TaxZone> {
    zone(id, label, display_label, vec![Territory::country(country_code)], rates)
}
