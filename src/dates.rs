//! Calendar-date handling.
//!
//! Dates are stored as `YYYY-MM-DD` text, so a well-formed date string
//! compares lexicographically in chronological order. Everything that
//! reaches a query goes through [`parse_date`] first.

use chrono::{Duration, NaiveDate};

use crate::error::{ClimateError, Result};

/// Storage and wire format for observation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the "last year of data" window
pub const LOOKBACK_DAYS: i64 = 365;

/// Parse a `YYYY-MM-DD` request parameter.
///
/// Only the zero-padded form is accepted: `2017-1-5` would not sort
/// correctly against stored dates.
pub fn parse_date(param: &str, raw: &str) -> Result<NaiveDate> {
    let invalid = || ClimateError::InvalidParameter {
        param: param.to_string(),
        message: format!("'{}' is not a calendar date in YYYY-MM-DD form", raw),
    };

    if raw.len() != 10 {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

/// The start of the one-year window ending at `latest`.
pub fn one_year_before(latest: NaiveDate) -> NaiveDate {
    latest - Duration::days(LOOKBACK_DAYS)
}

/// Render a date the way the dataset stores it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
