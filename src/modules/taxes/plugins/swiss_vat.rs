use crate::core::Result;
use crate::modules::taxes::models::TaxTypeConfig;
use crate::modules::taxes::services::{LocalTaxType, SourcingPolicy};
use crate::modules::zones::{TaxZone, Territory};

use super::zone_data::{rate, zone};

pub const PLUGIN_ID: &str = "swiss_vat";

pub fn build_zones() -> Result<Vec<TaxZone>> {
    Ok(vec![zone(
        "ch",
        "Switzerland",
        "VAT",
        vec![
            Territory::country("CH"),
            Territory::country("LI"),
            // Büsingen am Hochrhein
            Territory::country("DE").including("78266")?,
        ],
        vec![
            rate(
                "standard",
                "Standard",
                &[
                    ("0.08", "2011-01-01", Some("2017-12-31")),
                    ("0.077", "2018-01-01", Some("2023-12-31")),
                    ("0.081", "2024-01-01", None),
                ],
            )?
            .as_default(),
            rate(
                "hotel",
                "Hotel",
                &[
                    ("0.038", "2011-01-01", Some("2017-12-31")),
                    ("0.037", "2018-01-01", Some("2023-12-31")),
                    ("0.038", "2024-01-01", None),
                ],
            )?,
            rate(
                "reduced",
                "Reduced",
                &[
                    ("0.025", "2011-01-01", Some("2023-12-31")),
                    ("0.026", "2024-01-01", None),
                ],
            )?,
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
