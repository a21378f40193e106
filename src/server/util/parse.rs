use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::server::error::validation::ValidationError;

/// Naive formats accepted for instants, interpreted as UTC.
const NAIVE_INSTANT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses an instant from a request field.
///
/// Accepts RFC 3339 (any offset, normalised to UTC) or `YYYY-MM-DD HH:MM[:SS]` taken as UTC.
///
/// # Arguments
/// - `field` - Name of the request field, used in the validation message
/// - `value` - Raw string from the request
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant
/// - `Err(ValidationError)` - Value matches none of the accepted formats
pub fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    NAIVE_INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ValidationError::field(field, format!("The {} is not a valid date.", field))
        })
}

/// Parses a `YYYY-MM-DD` calendar date from a request field.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::field(field, format!("The {} is not a valid date.", field)))
}
