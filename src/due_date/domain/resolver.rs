//! Resolution of a validated submission into a due timestamp.
//!
//! The walk is arithmetic rather than iterative: the turnaround is split into
//! a [`TurnaroundBreakdown`], the remainder hours are rolled into the next
//! working day when they would cross the daily close, and two calendar days
//! are added per weekend crossed.

use super::{DueDateError, DueDateResult, TurnaroundBreakdown, TurnaroundHours, WorkCalendar};
use chrono::{Datelike, NaiveDateTime, TimeDelta, Weekday};

/// Offsets applied to a submission to reach its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Hours to add, including any overnight rollover.
    pub hours: u32,
    /// Calendar days to add, including any weekend skip.
    pub days: u32,
    /// Whether the remainder hours rolled into the next working day.
    pub rolled_over: bool,
    /// Whether a weekend skip was applied.
    pub skipped_weekend: bool,
}

/// Computes the hour and day offsets for a validated submission.
///
/// The submission must already be inside the working calendar; no further
/// validation happens here.
#[must_use]
pub fn plan(submitted_at: NaiveDateTime, breakdown: TurnaroundBreakdown) -> Resolution {
    let calendar = WorkCalendar::new();
    let rolled_over = crosses_close(calendar, submitted_at, breakdown.hours);
    let hours = if rolled_over {
        breakdown.hours + WorkCalendar::OFF_HOURS_PER_DAY
    } else {
        breakdown.hours
    };

    let weekday = submitted_at.weekday();
    let passes_friday = weekday.num_days_from_sunday().saturating_add(breakdown.days)
        > WorkCalendar::LAST_WORKING_DAY_INDEX;
    let friday_rollover = weekday == Weekday::Fri && rolled_over;
    let skipped_weekend = passes_friday || friday_rollover;

    let days = if skipped_weekend {
        breakdown.days.saturating_add(weekend_skip(breakdown.weeks))
    } else {
        breakdown.days
    };

    Resolution {
        hours,
        days,
        rolled_over,
        skipped_weekend,
    }
}

/// Resolves the due timestamp for a validated submission.
///
/// # Errors
///
/// Returns [`DueDateError::DueDateOutOfRange`] when the result cannot be
/// represented as a `NaiveDateTime`.
pub fn resolve(
    submitted_at: NaiveDateTime,
    turnaround: TurnaroundHours,
) -> DueDateResult<NaiveDateTime> {
    apply(submitted_at, turnaround, plan(submitted_at, turnaround.breakdown()))
}

/// Applies precomputed offsets to a submission.
///
/// # Errors
///
/// Returns [`DueDateError::DueDateOutOfRange`] when the result cannot be
/// represented as a `NaiveDateTime`.
pub fn apply(
    submitted_at: NaiveDateTime,
    turnaround: TurnaroundHours,
    resolution: Resolution,
) -> DueDateResult<NaiveDateTime> {
    let out_of_range = || DueDateError::DueDateOutOfRange {
        submitted_at,
        turnaround_hours: turnaround.value(),
    };

    let hours = TimeDelta::try_hours(i64::from(resolution.hours)).ok_or_else(out_of_range)?;
    let days = TimeDelta::try_days(i64::from(resolution.days)).ok_or_else(out_of_range)?;

    submitted_at
        .checked_add_signed(hours)
        .and_then(|shifted| shifted.checked_add_signed(days))
        .ok_or_else(out_of_range)
}

/// Whether adding `hours` to the submission's time of day passes the close.
fn crosses_close(calendar: WorkCalendar, submitted_at: NaiveDateTime, hours: u32) -> bool {
    let Some(delta) = TimeDelta::try_hours(i64::from(hours)) else {
        return true;
    };
    let (candidate, wrapped_seconds) = submitted_at.time().overflowing_add_signed(delta);
    wrapped_seconds != 0 || candidate > calendar.closing_time()
}

/// Calendar days added when a weekend is crossed.
const fn weekend_skip(weeks: u32) -> u32 {
    if weeks > 1 {
        weeks.saturating_mul(WorkCalendar::WEEKEND_DAYS)
    } else {
        WorkCalendar::WEEKEND_DAYS
    }
}
