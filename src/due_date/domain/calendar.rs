//! The fixed business calendar used for due date resolution.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

/// Fixed working calendar: Monday to Friday, 09:00 to 17:00, no holidays.
///
/// The closing instant 17:00:00 is part of the working window; any instant
/// after it is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkCalendar;

impl WorkCalendar {
    /// Hour at which the working day opens.
    pub const OPENING_HOUR: u32 = 9;
    /// Hour at which the working day closes.
    pub const CLOSING_HOUR: u32 = 17;
    /// Working hours in one working day.
    pub const HOURS_PER_DAY: u32 = 8;
    /// Working hours in one working week.
    pub const HOURS_PER_WEEK: u32 = 40;
    /// Hours between one day's close and the next day's opening.
    pub const OFF_HOURS_PER_DAY: u32 = 24 - Self::HOURS_PER_DAY;
    /// Calendar days skipped for each weekend crossed.
    pub const WEEKEND_DAYS: u32 = 2;
    /// Sunday-based index of the last working day (Friday).
    pub const LAST_WORKING_DAY_INDEX: u32 = 5;

    /// Creates the standard calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Opening instant of the working window.
    #[must_use]
    pub const fn opening_time(self) -> NaiveTime {
        // Infallible: the constant hour is in range.
        match NaiveTime::from_hms_opt(Self::OPENING_HOUR, 0, 0) {
            Some(time) => time,
            None => NaiveTime::MIN,
        }
    }

    /// Closing instant of the working window.
    #[must_use]
    pub const fn closing_time(self) -> NaiveTime {
        match NaiveTime::from_hms_opt(Self::CLOSING_HOUR, 0, 0) {
            Some(time) => time,
            None => NaiveTime::MIN,
        }
    }

    /// Whether `weekday` is a working day.
    #[must_use]
    pub const fn is_working_day(self, weekday: Weekday) -> bool {
        !matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Whether `time` falls within the working window, closing instant included.
    #[must_use]
    pub fn is_working_time(self, time: NaiveTime) -> bool {
        time >= self.opening_time() && time <= self.closing_time()
    }

    /// Whether `timestamp` falls on a working day within working hours.
    #[must_use]
    pub fn contains(self, timestamp: NaiveDateTime) -> bool {
        self.is_working_day(timestamp.weekday()) && self.is_working_time(timestamp.time())
    }
}
