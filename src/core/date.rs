use chrono::{NaiveDate, Utc};

use crate::core::{Result, TaxError};

/// Calendar helpers for rate schedules and order calculation dates.
/// Dates are always calendar days in UTC; time of day never matters for tax.
pub struct CalendarDate;

impl CalendarDate {
    /// Today's date in UTC, used for orders that have not been placed yet
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`)
    pub fn parse(value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|e| TaxError::configuration(format!("Invalid date '{}': {}", value, e)))
    }
}

/// Parse a date literal from built-in zone data.
///
/// Built-in tables are static, so a malformed literal is surfaced as a
/// configuration error when the zone table is built.
pub fn date(value: &str) -> Result<NaiveDate> {
    CalendarDate::parse(value)
}
