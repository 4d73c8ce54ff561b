//! User-defined tax type: a single zone built from configured rates and
//! territories.

use chrono::NaiveDate;

use crate::core::{Result, TaxError};
use crate::modules::taxes::models::{CustomRateConfig, TaxTypeConfig};
use crate::modules::taxes::services::{LocalTaxType, SourcingPolicy};
use crate::modules::zones::{TaxRate, TaxRatePercentage, TaxZone};

pub const PLUGIN_ID: &str = "custom";

pub const ZONE_ID: &str = "default";

/// Start date for rates configured without one
fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn build_rate(config: &CustomRateConfig) -> Result<TaxRate> {
    let start_date = config.start_date.unwrap_or_else(default_start_date);
    let rate = TaxRate::new(
        &config.id,
        &config.label,
        vec![TaxRatePercentage::new(config.percentage, start_date, None)],
    )?;
    Ok(if config.default { rate.as_default() } else { rate })
}

pub fn build_zones(config: &TaxTypeConfig) -> Result<Vec<TaxZone>> {
    let settings = &config.configuration;
    if settings.rates.is_empty() {
        return Err(TaxError::configuration(format!(
            "Custom tax type '{}' has no rates",
            config.id
        )));
    }

    let mut rates = settings
        .rates
        .iter()
        .map(build_rate)
        .collect::<Result<Vec<_>>>()?;
    // The first rate is the default unless one is flagged.
    if !rates.iter().any(TaxRate::is_default) {
        if let Some(first) = rates.first_mut() {
            first.default = true;
        }
    }

    let display_label = settings.display_label.unwrap_or_default();
    Ok(vec![TaxZone::new(
        ZONE_ID,
        &config.label,
        display_label.as_str(),
        settings.territories.clone(),
        rates,
    )?])
}

pub fn create(config: &TaxTypeConfig) -> Result<LocalTaxType> {
    let settings = &config.configuration;
    Ok(LocalTaxType::new(
        &config.id,
        &config.label,
        PLUGIN_ID,
        build_zones(config)?,
        SourcingPolicy::Default,
    )?
    .display_inclusive(settings.display_inclusive.unwrap_or(false))
    .rounding(settings.round.unwrap_or(true)))
}
