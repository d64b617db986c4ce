//! Timestamp parsing for request fields.
//!
//! The admin frontend sends both full RFC 3339 strings (`toISOString()`)
//! and the zone-less value of `<input type="datetime-local">`. Zone-less
//! values are interpreted as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Zone-less layouts accepted after RFC 3339 fails, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a request timestamp. `field` names the input in the error message.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            CoreError::Validation(format!("{field} is not a valid timestamp: '{raw}'"))
        })
}
