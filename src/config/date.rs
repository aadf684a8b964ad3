//! Reference date parsing.

use chrono::{Days, Local, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid reference date '{0}': expected today, yesterday, YYYY-MM-DD or M/D/YYYY")]
pub struct DateParseError(pub String);

/// Parse a reference date relative to the local current date.
///
/// Supports:
/// - `today`, `yesterday`
/// - ISO dates: `2024-01-15`
/// - Ticket display dates: `1/15/2024`
pub fn parse_reference_date(s: &str) -> Result<NaiveDate, DateParseError> {
    parse_reference_date_from(s, Local::now().date_naive())
}

/// Parse a reference date with an explicit "today".
pub fn parse_reference_date_from(s: &str, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => {
            return today
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| DateParseError(s.to_string()))
        }
        _ => {}
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .map_err(|_| DateParseError(s.to_string()))
}
