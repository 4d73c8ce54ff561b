//! Canadian GST/HST/PST/QST.
//!
//! The federal GST zone covers the provinces without a harmonized tax;
//! provincial zones stack on top of it where a provincial tax exists.

use crate::core::Result;
use crate::modules::taxes::models::TaxTypeConfig;
use crate::modules::taxes::services::{LocalTaxType, SourcingPolicy};
use crate::modules::zones::{TaxZone, Territory};

use super::zone_data::{rate, zone};

pub const PLUGIN_ID: &str = "canadian_sales_tax";

fn provinces(codes: &[&str]) -> Vec<Territory> {
    codes
        .iter()
        .map(|code| Territory::country("CA").with_administrative_area(code))
        .collect()
}

fn provincial(
    id: &str,
    label: &str,
    display_label: &str,
    province: &str,
    rows: &[super::zone_data::PercentageRow],
) -> Result<TaxZone> {
    zone(
        id,
        label,
        display_label,
        provinces(&[province]),
        vec![rate(display_label.to_lowercase().as_str(), display_label, rows)?.as_default()],
    )
}

pub fn build_zones() -> Result<Vec<TaxZone>> {
    Ok(vec![
        zone(
            "ca",
            "Canada",
            "GST",
            provinces(&["AB", "BC", "MB", "NT", "NU", "QC", "SK", "YT"]),
            vec![rate("gst", "GST", &[("0.05", "2008-01-01", None)])?.as_default()],
        )?,
        provincial(
            "ca_bc",
            "British Columbia",
            "PST",
            "BC",
            &[("0.07", "2013-04-01", None)],
        )?,
        provincial(
            "ca_mb",
            "Manitoba",
            "PST",
            "MB",
            &[
                ("0.08", "2013-07-01", Some("2019-06-30")),
                ("0.07", "2019-07-01", None),
            ],
        )?,
        provincial(
            "ca_nb",
            "New Brunswick",
            "HST",
            "NB",
            &[
                ("0.13", "2010-07-01", Some("2016-06-30")),
                ("0.15", "2016-07-01", None),
            ],
        )?,
        provincial(
            "ca_nl",
            "Newfoundland and Labrador",
            "HST",
            "NL",
            &[
                ("0.13", "2010-07-01", Some("2016-06-30")),
                ("0.15", "2016-07-01", None),
            ],
        )?,
        provincial(
            "ca_ns",
            "Nova Scotia",
            "HST",
            "NS",
            &[
                ("0.15", "2010-07-01", Some("2025-03-31")),
                ("0.14", "2025-04-01", None),
            ],
        )?,
        provincial(
            "ca_on",
            "Ontario",
            "HST",
            "ON",
            &[("0.13", "2010-07-01", None)],
        )?,
        provincial(
            "ca_pe",
            "Prince Edward Island",
            "HST",
            "PE",
            &[
                ("0.14", "2013-04-01", Some("2016-09-30")),
                ("0.15", "2016-10-01", None),
            ],
        )?,
        provincial(
            "ca_qc",
            "Quebec",
            "QST",
            "QC",
            &[("0.09975", "2013-01-01", None)],
        )?,
        provincial(
            "ca_sk",
            "Saskatchewan",
            "PST",
            "SK",
            &[
                ("0.05", "2013-01-01", Some("2017-03-22")),
                ("0.06", "2017-03-23", None),
            ],
        )?,
    ])
}

pub fn create(config: &TaxTypeConfig) -> Result<LocalTaxType> {
    Ok(LocalTaxType::new(
        &config.id,
        &config.label,
        PLUGIN_ID,
        build_zones()?,
        SourcingPolicy::CanadianRestricted,
    )?
    .display_inclusive(config.configuration.display_inclusive.unwrap_or(false)))
}
