use crate::core::Result;
use crate::modules::taxes::models::TaxTypeConfig;
use crate::modules::taxes::services::{LocalTaxType, SourcingPolicy};
use crate::modules::zones::TaxZone;

use super::zone_data::{country_zone, rate};

pub const PLUGIN_ID: &str = "norwegian_vat";

pub fn build_zones() -> Result<Vec<TaxZone>> {
    Ok(vec![country_zone(
        "no",
        "Norway",
        "VAT",
        "NO",
        vec![
            rate("standard", "Standard", &[("0.25", "2005-01-01", None)])?.as_default(),
            rate("intermediate", "Intermediate", &[("0.15", "2012-01-01", None)])?,
            rate(
                "reduced",
                "Reduced",
                &[
                    ("0.1", "2016-01-01", Some("2017-12-31")),
                    ("0.12", "2018-01-01", None),
                ],
            )?,
            rate("zero", "Zero", &[("0", "2001-07-01", None)])?,
        ],
    )?])
}

pub fn create(config: &TaxTypeConfig) -> Result<LocalTaxType> {
    Ok(LocalTaxType::new(
        &config.id,
        &config.label,
        PLUGIN_ID,
        build_zones()?,
        SourcingPolicy::Default,
    )?
    .display_inclusive(config.configuration.display_inclusive.unwrap_or(true)))
}
