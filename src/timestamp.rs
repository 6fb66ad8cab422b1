//! Unix timestamp parsing and display

use chrono::{DateTime, Utc};

/// RFC 1123 layout, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`
const UTC_DISPLAY_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Parse a subgraph timestamp (unix seconds) from its raw text
///
/// Integer text is taken as is; decimal text is truncated toward zero.
/// Anything else yields `None`.
pub fn parse_epoch(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if let Ok(secs) = raw.parse::<i64>() {
        return Some(secs);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && secs.abs() < i64::MAX as f64)
        .map(|secs| secs.trunc() as i64)
}

/// Format unix seconds as a UTC calendar date
///
/// Absent or out-of-range epochs produce an empty string, never an error text.
///
/// # Examples
///
/// ```
/// use aavescan::format_date;
///
/// assert_eq!(format_date(Some(0)), "Thu, 01 Jan 1970 00:00:00 GMT");
/// assert_eq!(format_date(None), "");
/// ```
pub fn format_date(epoch: Option<i64>) -> String {
    epoch
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|date| date.format(UTC_DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}
