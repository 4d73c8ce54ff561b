//! European Union VAT.
//!
//! One zone per member state, plus the zero-rated intra-community supply
//! zone used for cross-border B2B sales. Special territories outside the EU
//! VAT area (Heligoland, Büsingen, the Canary Islands, Åland, ...) are
//! carved out with postal code rules.

use crate::core::Result;
use crate::modules::customers::EuropeanUnionVatNumberValidator;
use crate::modules::taxes::models::TaxTypeConfig;
use crate::modules::taxes::services::{LocalTaxType, SourcingPolicy};
use crate::modules::zones::{TaxZone, Territory};

use super::zone_data::{country_zone, rate, zone};

pub const PLUGIN_ID: &str = "european_union_vat";

pub const INTRA_COMMUNITY_SUPPLY_ZONE: &str = "ic";

/// Member state country codes (ISO 3166-1, so Greece is GR)
pub const EU_COUNTRIES: [&str; 27] = [
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

const VAT: &str = "VAT";

pub fn intra_community_supply_zone() -> Result<TaxZone> {
    zone(
        INTRA_COMMUNITY_SUPPLY_ZONE,
        "Intra-Community Supply",
        VAT,
        EU_COUNTRIES.iter().map(|code| Territory::country(code)).collect(),
        vec![rate(
            "zero",
            "Intra-Community Supply",
            &[("0", "1993-01-01", None)],
        )?
        .as_default()],
    )
}

pub fn build_zones() -> Result<Vec<TaxZone>> {
    Ok(vec![
        zone(
            "at",
            "Austria",
            VAT,
            vec![Territory::country("AT").excluding("6691, 6991:6993")?],
            vec![
                rate("standard", "Standard", &[("0.2", "1984-01-01", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.1", "1984-01-01", None)])?,
                rate("intermediate", "Intermediate", &[("0.13", "2016-01-01", None)])?,
            ],
        )?,
        country_zone(
            "be",
            "Belgium",
            VAT,
            "BE",
            vec![
                rate("standard", "Standard", &[("0.21", "1996-01-01", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.06", "1971-01-01", None)])?,
                rate("intermediate", "Intermediate", &[("0.12", "1992-04-01", None)])?,
            ],
        )?,
        country_zone(
            "bg",
            "Bulgaria",
            VAT,
            "BG",
            vec![
                rate("standard", "Standard", &[("0.2", "2007-01-01", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.09", "2011-04-01", None)])?,
            ],
        )?,
        country_zone(
            "cy",
            "Cyprus",
            VAT,
            "CY",
            vec![
                rate("standard", "Standard", &[("0.19", "2014-01-13", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.05", "2004-05-01", None)])?,
                rate("intermediate", "Intermediate", &[("0.09", "2014-01-13", None)])?,
            ],
        )?,
        country_zone(
            "cz",
            "Czech Republic",
            VAT,
            "CZ",
            vec![
                rate("standard", "Standard", &[("0.21", "2013-01-01", None)])?.as_default(),
                rate(
                    "reduced",
                    "Reduced",
                    &[
                        ("0.15", "2013-01-01", Some("2023-12-31")),
                        ("0.12", "2024-01-01", None),
                    ],
                )?,
            ],
        )?,
        zone(
            "de",
            "Germany",
            VAT,
            vec![
                Territory::country("DE").excluding("27498, 78266")?,
                // Jungholz and Mittelberg apply German VAT.
                Territory::country("AT").including("6691, 6991:6993")?,
            ],
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.19", "2007-01-01", Some("2020-06-30")),
                        ("0.16", "2020-07-01", Some("2020-12-31")),
                        ("0.19", "2021-01-01", None),
                    ],
                )?
                .as_default(),
                rate(
                    "reduced",
                    "Reduced",
                    &[
                        ("0.07", "2007-01-01", Some("2020-06-30")),
                        ("0.05", "2020-07-01", Some("2020-12-31")),
                        ("0.07", "2021-01-01", None),
                    ],
                )?,
            ],
        )?,
        country_zone(
            "dk",
            "Denmark",
            VAT,
            "DK",
            vec![rate("standard", "Standard", &[("0.25", "1992-01-01", None)])?.as_default()],
        )?,
        country_zone(
            "ee",
            "Estonia",
            VAT,
            "EE",
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.2", "2009-07-01", Some("2023-12-31")),
                        ("0.22", "2024-01-01", Some("2025-06-30")),
                        ("0.24", "2025-07-01", None),
                    ],
                )?
                .as_default(),
                rate("reduced", "Reduced", &[("0.09", "2009-07-01", None)])?,
            ],
        )?,
        zone(
            "es",
            "Spain",
            VAT,
            // Canary Islands, Ceuta and Melilla are outside the EU VAT area.
            vec![Territory::country("ES").excluding("/^(35|38|51|52)[0-9]{3}/")?],
            vec![
                rate("standard", "Standard", &[("0.21", "2012-09-01", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.1", "2012-09-01", None)])?,
                rate("super_reduced", "Super Reduced", &[("0.04", "1995-01-01", None)])?,
            ],
        )?,
        zone(
            "fi",
            "Finland",
            VAT,
            // Åland
            vec![Territory::country("FI").excluding("22000:22999")?],
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.24", "2013-01-01", Some("2024-08-31")),
                        ("0.255", "2024-09-01", None),
                    ],
                )?
                .as_default(),
                rate("intermediate", "Intermediate", &[("0.14", "2013-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.1", "2013-01-01", None)])?,
            ],
        )?,
        zone(
            "fr",
            "France",
            VAT,
            vec![
                // Overseas departments and collectivities
                Territory::country("FR").excluding("/^(97|98)[0-9]{3}/")?,
                Territory::country("MC"),
            ],
            vec![
                rate("standard", "Standard", &[("0.2", "2014-01-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.1", "2014-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.055", "1982-07-01", None)])?,
                rate("super_reduced", "Super Reduced", &[("0.021", "1986-07-01", None)])?,
            ],
        )?,
        zone(
            "gr",
            "Greece",
            VAT,
            // Mount Athos
            vec![Territory::country("GR").excluding("63086, 63087")?],
            vec![
                rate("standard", "Standard", &[("0.24", "2016-06-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.13", "2011-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.06", "2015-07-01", None)])?,
            ],
        )?,
        country_zone(
            "hr",
            "Croatia",
            VAT,
            "HR",
            vec![
                rate("standard", "Standard", &[("0.25", "2012-03-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.13", "2014-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.05", "2013-01-01", None)])?,
            ],
        )?,
        country_zone(
            "hu",
            "Hungary",
            VAT,
            "HU",
            vec![
                rate("standard", "Standard", &[("0.27", "2012-01-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.18", "2009-07-01", None)])?,
                rate("reduced", "Reduced", &[("0.05", "2009-07-01", None)])?,
            ],
        )?,
        country_zone(
            "ie",
            "Ireland",
            VAT,
            "IE",
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.23", "2012-01-01", Some("2020-08-31")),
                        ("0.21", "2020-09-01", Some("2021-02-28")),
                        ("0.23", "2021-03-01", None),
                    ],
                )?
                .as_default(),
                rate("intermediate", "Intermediate", &[("0.135", "2003-01-01", None)])?,
                rate("second_reduced", "Second Reduced", &[("0.09", "2011-07-01", None)])?,
            ],
        )?,
        zone(
            "it",
            "Italy",
            VAT,
            // Livigno and Campione d'Italia
            vec![Territory::country("IT").excluding("23030, 22060")?],
            vec![
                rate("standard", "Standard", &[("0.22", "2013-10-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.1", "1995-02-24", None)])?,
                rate("super_reduced", "Super Reduced", &[("0.04", "1989-01-01", None)])?,
            ],
        )?,
        country_zone(
            "lt",
            "Lithuania",
            VAT,
            "LT",
            vec![
                rate("standard", "Standard", &[("0.21", "2009-09-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.09", "2009-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.05", "2009-07-01", None)])?,
            ],
        )?,
        country_zone(
            "lu",
            "Luxembourg",
            VAT,
            "LU",
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.17", "2015-01-01", Some("2022-12-31")),
                        ("0.16", "2023-01-01", Some("2023-12-31")),
                        ("0.17", "2024-01-01", None),
                    ],
                )?
                .as_default(),
                rate(
                    "intermediate",
                    "Intermediate",
                    &[
                        ("0.08", "2015-01-01", Some("2022-12-31")),
                        ("0.07", "2023-01-01", Some("2023-12-31")),
                        ("0.08", "2024-01-01", None),
                    ],
                )?,
                rate("super_reduced", "Super Reduced", &[("0.03", "1983-07-01", None)])?,
            ],
        )?,
        country_zone(
            "lv",
            "Latvia",
            VAT,
            "LV",
            vec![
                rate("standard", "Standard", &[("0.21", "2012-07-01", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.12", "2011-01-01", None)])?,
            ],
        )?,
        country_zone(
            "mt",
            "Malta",
            VAT,
            "MT",
            vec![
                rate("standard", "Standard", &[("0.18", "2004-01-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.07", "2011-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.05", "1995-01-01", None)])?,
            ],
        )?,
        country_zone(
            "nl",
            "Netherlands",
            VAT,
            "NL",
            vec![
                rate("standard", "Standard", &[("0.21", "2012-10-01", None)])?.as_default(),
                rate(
                    "reduced",
                    "Reduced",
                    &[
                        ("0.06", "1986-10-01", Some("2018-12-31")),
                        ("0.09", "2019-01-01", None),
                    ],
                )?,
            ],
        )?,
        country_zone(
            "pl",
            "Poland",
            VAT,
            "PL",
            vec![
                rate("standard", "Standard", &[("0.23", "2011-01-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.08", "2011-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.05", "2011-01-01", None)])?,
            ],
        )?,
        country_zone(
            "pt",
            "Portugal",
            VAT,
            "PT",
            vec![
                rate("standard", "Standard", &[("0.23", "2011-01-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.13", "2010-07-01", None)])?,
                rate("reduced", "Reduced", &[("0.06", "2010-07-01", None)])?,
            ],
        )?,
        country_zone(
            "ro",
            "Romania",
            VAT,
            "RO",
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.19", "2017-01-01", Some("2025-07-31")),
                        ("0.21", "2025-08-01", None),
                    ],
                )?
                .as_default(),
                rate(
                    "reduced",
                    "Reduced",
                    &[
                        ("0.09", "2008-12-01", Some("2025-07-31")),
                        ("0.11", "2025-08-01", None),
                    ],
                )?,
            ],
        )?,
        country_zone(
            "se",
            "Sweden",
            VAT,
            "SE",
            vec![
                rate("standard", "Standard", &[("0.25", "1990-07-01", None)])?.as_default(),
                rate("intermediate", "Intermediate", &[("0.12", "1992-01-01", None)])?,
                rate("reduced", "Reduced", &[("0.06", "1996-01-01", None)])?,
            ],
        )?,
        country_zone(
            "si",
            "Slovenia",
            VAT,
            "SI",
            vec![
                rate("standard", "Standard", &[("0.22", "2013-07-01", None)])?.as_default(),
                rate("reduced", "Reduced", &[("0.095", "2013-07-01", None)])?,
                rate("super_reduced", "Super Reduced", &[("0.05", "2020-01-01", None)])?,
            ],
        )?,
        country_zone(
            "sk",
            "Slovakia",
            VAT,
            "SK",
            vec![
                rate(
                    "standard",
                    "Standard",
                    &[
                        ("0.2", "2011-01-01", Some("2024-12-31")),
                        ("0.23", "2025-01-01", None),
                    ],
                )?
                .as_default(),
                rate(
                    "reduced",
                    "Reduced",
                    &[
                        ("0.1", "2011-01-01", Some("2024-12-31")),
                        ("0.19", "2025-01-01", None),
                    ],
                )?,
            ],
        )?,
    ])
}

pub fn create(config: &TaxTypeConfig) -> Result<LocalTaxType> {
    let sourcing = SourcingPolicy::EuVat {
        intra_community_supply: intra_community_supply_zone()?,
        tax_numbers: Box::new(EuropeanUnionVatNumberValidator::new(
            config.configuration.allow_unverified_tax_numbers,
        )),
    };

    Ok(
        LocalTaxType::new(&config.id, &config.label, PLUGIN_ID, build_zones()?, sourcing)?
            .display_inclusive(config.configuration.display_inclusive.unwrap_or(true)),
    )
}
