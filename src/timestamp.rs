//! # Timestamp Module
//!
//! Converts the two browser timestamp encodings into the display format used
//! in exported records. Chromium stores microseconds since 1601-01-01 UTC
//! (the WebKit epoch), Firefox stores microseconds since the Unix epoch.
//!
//! Conversion never fails toward the caller: missing, zero, pre-epoch, or
//! out-of-range inputs all come back as `None` and surface as blank cells.

use chrono::{DateTime, Utc};

/// Microseconds between 1601-01-01 and 1970-01-01.
pub const WEBKIT_TO_UNIX_OFFSET_MICROS: i64 = 11_644_473_600_000_000;

const MICROS_PER_SEC: i64 = 1_000_000;

/// Display format: no leading zeros on month/day/hour, 12-hour clock,
/// two spaces between the date and time fields.
pub const DISPLAY_FORMAT: &str = "%-m/%-d/%Y  %-I:%M:%S %p UTC";

/// Convert a Chromium `last_visit_time`/`visit_time`/`start_time` value.
pub fn webkit_micros_to_utc(raw: Option<i64>) -> Option<String> {
    let micros = raw.filter(|v| *v > 0)?;
    let unix_micros = micros.checked_sub(WEBKIT_TO_UNIX_OFFSET_MICROS)?;
    format_unix_micros(unix_micros)
}

/// Convert a Firefox `visit_date`/`last_visit_date`/`startTime` value.
pub fn unix_micros_to_utc(raw: Option<i64>) -> Option<String> {
    let micros = raw.filter(|v| *v > 0)?;
    format_unix_micros(micros)
}

fn format_unix_micros(micros: i64) -> Option<String> {
    if micros < 0 {
        return None;
    }
    let secs = micros / MICROS_PER_SEC;
    let nsecs = ((micros % MICROS_PER_SEC) as u32) * 1000;
    let dt = DateTime::<Utc>::from_timestamp(secs, nsecs)?;
    Some(dt.format(DISPLAY_FORMAT).to_string())
}
