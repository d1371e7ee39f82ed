//! Short human-readable labels for publication timestamps.
use chrono::{DateTime, Utc};

use crate::errors::DateError;

/// `Mar 01, 2021`: English month abbreviation, zero-padded day, four-digit year.
const LABEL_FORMAT: &str = "%b %d, %Y";

/// Parses an ISO-8601 (RFC 3339) timestamp and normalizes it to UTC.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, DateError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| DateError::InvalidTimestamp {
            timestamp: timestamp.to_string(),
            source,
        })
}

/// Formats the UTC calendar date of `date`.
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format(LABEL_FORMAT).to_string()
}

/// Formats an ISO-8601 timestamp as a short date label.
///
/// ## Example
/// ```rust
/// use pssr::date::format_date;
///
/// assert_eq!(format_date("2021-03-01T03:00:00.000Z").unwrap(), "Mar 01, 2021");
/// ```
pub fn format_date(timestamp: &str) -> Result<String, DateError> {
    parse_timestamp(timestamp).map(|date| format_datetime(&date))
}
