//! Timestamp display helpers.
//!
//! The backend serializes datetimes as ISO-8601, sometimes with an offset and
//! sometimes naive. Unparseable values are shown verbatim.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp, keeping the wall-clock time as written.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `May 1, 2024`
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%b %-d, %Y").to_string())
}

/// `May 1, 10:05`
pub fn format_short_datetime(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%b %-d, %H:%M").to_string())
}

/// `May 1, 2024 10:05`
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%b %-d, %Y %H:%M").to_string())
}

/// Date for an optional timestamp, `N/A` when absent.
pub fn date_or_na(raw: Option<&str>) -> String {
    raw.filter(|value| !value.is_empty()).map_or_else(|| "N/A".to_owned(), format_date)
}
