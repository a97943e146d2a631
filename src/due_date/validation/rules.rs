//! Individual validation rule implementations.
//!
//! Each rule is a pure function checking one precondition of the calculator.
//! Shape rules turn untyped JSON values into domain values; window rules
//! check a submission against the [`WorkCalendar`].

use crate::due_date::domain::{DueDateError, DueDateResult, TurnaroundHours, WorkCalendar};
use chrono::{DateTime, Datelike, NaiveDateTime};
use serde_json::Value;

/// Wall-clock formats accepted for submission timestamps without an offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an untyped submission value into a timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` (both with optional
/// fractional seconds), and RFC 3339 strings with an offset, whose wall-clock
/// time is kept and offset discarded.
///
/// # Errors
///
/// Returns [`DueDateError::MissingSubmission`] for an absent or null value and
/// [`DueDateError::MalformedSubmission`] for anything that is not a parseable
/// date-time string.
pub fn parse_submission(value: &Value) -> DueDateResult<NaiveDateTime> {
    let raw = match value {
        Value::Null => return Err(DueDateError::MissingSubmission),
        Value::String(raw) => raw.trim(),
        other => return Err(DueDateError::MalformedSubmission(other.to_string())),
    };

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| DueDateError::MalformedSubmission(raw.to_owned()))
}

/// Parses an untyped turnaround value into a validated turnaround.
///
/// Only JSON integers are accepted; `9.0` is rejected even though it is
/// numerically whole.
///
/// # Errors
///
/// Returns [`DueDateError::MissingTurnaround`] for an absent or null value,
/// [`DueDateError::NonIntegerTurnaround`] for non-integer values,
/// [`DueDateError::NonPositiveTurnaround`] for zero or negative integers, and
/// [`DueDateError::TurnaroundTooLarge`] for integers above `u32::MAX`.
pub fn parse_turnaround(value: &Value) -> DueDateResult<TurnaroundHours> {
    let number = match value {
        Value::Null => return Err(DueDateError::MissingTurnaround),
        Value::Number(number) => number,
        other => return Err(DueDateError::NonIntegerTurnaround(other.to_string())),
    };

    if let Some(signed) = number.as_i64() {
        return TurnaroundHours::try_from(signed);
    }
    if let Some(unsigned) = number.as_u64() {
        return Err(DueDateError::TurnaroundTooLarge(unsigned));
    }
    Err(DueDateError::NonIntegerTurnaround(number.to_string()))
}

/// Validates a typed turnaround.
///
/// # Errors
///
/// Returns [`DueDateError::NonPositiveTurnaround`] when `hours` is zero.
pub const fn validate_turnaround(hours: u32) -> DueDateResult<TurnaroundHours> {
    TurnaroundHours::new(hours)
}

/// Validates that the submission falls on a working day.
///
/// # Errors
///
/// Returns [`DueDateError::NonWorkingDay`] for Saturday and Sunday submissions.
pub fn validate_working_day(
    calendar: WorkCalendar,
    submitted_at: NaiveDateTime,
) -> DueDateResult<()> {
    let weekday = submitted_at.weekday();
    if !calendar.is_working_day(weekday) {
        return Err(DueDateError::NonWorkingDay { weekday });
    }
    Ok(())
}

/// Validates that the submission falls within the daily working window.
///
/// # Errors
///
/// Returns [`DueDateError::OutsideWorkingHours`] before 09:00:00 or after
/// 17:00:00.
pub fn validate_working_hours(
    calendar: WorkCalendar,
    submitted_at: NaiveDateTime,
) -> DueDateResult<()> {
    let time = submitted_at.time();
    if !calendar.is_working_time(time) {
        return Err(DueDateError::OutsideWorkingHours { time });
    }
    Ok(())
}
