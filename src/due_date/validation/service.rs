//! Composite submission validator.
//!
//! Runs the rules in a fixed order and stops at the first failure: shape
//! checks, then the working-day check, then the working-hours check.

use crate::due_date::{
    domain::{DueDateResult, TurnaroundHours, WorkCalendar},
    validation::rules,
};
use chrono::NaiveDateTime;
use serde_json::Value;

/// A submission that passed every validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSubmission {
    submitted_at: NaiveDateTime,
    turnaround: TurnaroundHours,
}

impl ValidatedSubmission {
    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> NaiveDateTime {
        self.submitted_at
    }

    /// Returns the validated turnaround.
    #[must_use]
    pub const fn turnaround(&self) -> TurnaroundHours {
        self.turnaround
    }
}

/// Fail-fast validator for calculator inputs.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use due_date_calculator::due_date::validation::SubmissionValidator;
///
/// let submitted_at = NaiveDate::from_ymd_opt(2019, 9, 11)
///     .and_then(|date| date.and_hms_opt(12, 38, 0))
///     .expect("valid timestamp");
///
/// let validator = SubmissionValidator::new();
/// assert!(validator.validate(submitted_at, 9).is_ok());
/// assert!(validator.validate(submitted_at, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionValidator {
    calendar: WorkCalendar,
}

impl SubmissionValidator {
    /// Creates a validator over the standard working calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calendar: WorkCalendar::new(),
        }
    }

    /// Returns the calendar submissions are checked against.
    #[must_use]
    pub const fn calendar(&self) -> WorkCalendar {
        self.calendar
    }

    /// Validates typed inputs.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule's error.
    pub fn validate(
        &self,
        submitted_at: NaiveDateTime,
        turnaround_hours: u32,
    ) -> DueDateResult<ValidatedSubmission> {
        let turnaround = rules::validate_turnaround(turnaround_hours)?;
        self.validate_window(submitted_at)?;
        Ok(ValidatedSubmission {
            submitted_at,
            turnaround,
        })
    }

    /// Validates untyped inputs, checking their shape before the calendar.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule's error.
    pub fn validate_raw(
        &self,
        submitted_at: &Value,
        turnaround_hours: &Value,
    ) -> DueDateResult<ValidatedSubmission> {
        let submission = rules::parse_submission(submitted_at)?;
        let turnaround = rules::parse_turnaround(turnaround_hours)?;
        self.validate_window(submission)?;
        Ok(ValidatedSubmission {
            submitted_at: submission,
            turnaround,
        })
    }

    /// Validates only the calendar membership of a submission.
    ///
    /// # Errors
    ///
    /// Returns [`crate::due_date::domain::DueDateError::NonWorkingDay`] or
    /// [`crate::due_date::domain::DueDateError::OutsideWorkingHours`].
    pub fn validate_window(&self, submitted_at: NaiveDateTime) -> DueDateResult<()> {
        rules::validate_working_day(self.calendar, submitted_at)?;
        rules::validate_working_hours(self.calendar, submitted_at)
    }
}
