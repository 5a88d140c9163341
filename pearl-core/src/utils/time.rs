//! Date/time helpers
//!
//! Canonical formats: dates are `YYYY-MM-DD`, date-times are
//! `YYYY-MM-DD HH:MM:SS`. Controllers convert parsed date-times to Unix
//! millis before handing them to a data provider.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local date, e.g. `2026-08-04`.
pub fn current_date() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Current local date-time, e.g. `2026-08-04 14:03:59`.
pub fn current_date_time() -> String {
    Local::now().format(DATE_TIME_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date, `None` on malformed input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse a `YYYY-MM-DD HH:MM:SS` date-time, `None` on malformed input.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).ok()
}

/// Unix millis for a parsed date-time, interpreted as UTC.
pub fn date_time_to_millis(value: NaiveDateTime) -> i64 {
    value.and_utc().timestamp_millis()
}
