//! Validated turnaround values and their calendar decomposition.

use super::{DueDateError, WorkCalendar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive number of working hours requested for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TurnaroundHours(u32);

impl TurnaroundHours {
    /// Creates a validated turnaround.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::NonPositiveTurnaround`] when the value is zero.
    pub const fn new(value: u32) -> Result<Self, DueDateError> {
        if value == 0 {
            return Err(DueDateError::NonPositiveTurnaround(0));
        }
        Ok(Self(value))
    }

    /// Returns the underlying number of hours.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Splits the turnaround into weeks, days and remainder hours.
    #[must_use]
    pub const fn breakdown(self) -> TurnaroundBreakdown {
        TurnaroundBreakdown::from_hours(self.0)
    }
}

impl TryFrom<u32> for TurnaroundHours {
    type Error = DueDateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for TurnaroundHours {
    type Error = DueDateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(DueDateError::NonPositiveTurnaround(value));
        }
        let hours = u32::try_from(value)
            .map_err(|_| DueDateError::TurnaroundTooLarge(value.unsigned_abs()))?;
        Self::new(hours)
    }
}

impl From<TurnaroundHours> for u32 {
    fn from(turnaround: TurnaroundHours) -> Self {
        turnaround.0
    }
}

impl fmt::Display for TurnaroundHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

/// Decomposition of a turnaround over an 8-hour day and a 40-hour week.
///
/// `weeks` and `days` are both derived from the raw hour count; `days` is
/// not `weeks * 5` plus a remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnaroundBreakdown {
    /// Whole working weeks.
    pub weeks: u32,
    /// Whole working days.
    pub days: u32,
    /// Hours left over after whole days.
    pub hours: u32,
}

impl TurnaroundBreakdown {
    /// Decomposes a raw hour count.
    #[must_use]
    pub const fn from_hours(total: u32) -> Self {
        Self {
            weeks: total.div_euclid(WorkCalendar::HOURS_PER_WEEK),
            days: total.div_euclid(WorkCalendar::HOURS_PER_DAY),
            hours: total.rem_euclid(WorkCalendar::HOURS_PER_DAY),
        }
    }
}
