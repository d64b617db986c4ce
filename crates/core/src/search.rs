//! Filter parsing for the locker availability search.

use std::str::FromStr;

use crate::error::CoreError;
use crate::locker::{LockerSize, LockerStatus};
use crate::time::parse_timestamp;
use crate::types::Timestamp;

/// Filter value meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

/// A validated availability search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockerFilter {
    /// Case-insensitive substring of the beach name.
    pub beach_name: Option<String>,
    pub size: Option<LockerSize>,
    pub status: Option<LockerStatus>,
    /// Half-open `[start, end)` window that must be free of active rentals.
    pub range: Option<(Timestamp, Timestamp)>,
}

/// Returns `None` for absent, blank or `all` filter values.
pub fn filter_value(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty() && *v != FILTER_ALL)
}

/// Parse an optional labelled filter (`tamanho`, `status`).
pub fn parse_filter<T>(raw: Option<&str>) -> Result<Option<T>, CoreError>
where
    T: FromStr<Err = CoreError>,
{
    filter_value(raw).map(str::parse).transpose()
}

impl LockerFilter {
    /// Build a filter from raw query values.
    ///
    /// The date window applies only when both ends are present; it must
    /// not be empty or inverted.
    pub fn parse(
        beach_name: Option<&str>,
        size: Option<&str>,
        status: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, CoreError> {
        let range = match (filter_value(start), filter_value(end)) {
            (Some(s), Some(e)) => {
                let s = parse_timestamp("inicio", s)?;
                let e = parse_timestamp("fim", e)?;
                if s >= e {
                    return Err(CoreError::Validation(
                        "inicio must be before fim".to_string(),
                    ));
                }
                Some((s, e))
            }
            _ => None,
        };

        Ok(Self {
            beach_name: filter_value(beach_name).map(str::to_string),
            size: parse_filter(size)?,
            status: parse_filter(status)?,
            range,
        })
    }
}
