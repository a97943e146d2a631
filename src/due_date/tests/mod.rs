//! Unit tests for due date calculation.


use chrono::{NaiveDate, NaiveDateTime};

/// Builds a timestamp from calendar fields, panicking on invalid input.
pub(super) fn at(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid test timestamp")
}
