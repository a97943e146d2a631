//! Service layer composing validation and resolution.

use crate::due_date::{
    domain::{DueDateResult, WorkCalendar, resolver},
    services::DueDateRequest,
    validation::{SubmissionValidator, ValidatedSubmission},
};
use chrono::NaiveDateTime;
use mockable::Clock;
use tracing::debug;

/// Calculates due dates over the standard working calendar.
///
/// The calculator holds no per-call state and can be shared freely between
/// threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use due_date_calculator::due_date::services::DueDateCalculator;
///
/// let submitted_at = NaiveDate::from_ymd_opt(2019, 9, 13)
///     .and_then(|date| date.and_hms_opt(16, 58, 0))
///     .expect("valid timestamp");
/// let due = DueDateCalculator::new()
///     .calculate_due_date(submitted_at, 1)
///     .expect("Friday afternoon is a valid submission");
///
/// assert_eq!(due.to_string(), "2019-09-16 09:58:00");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateCalculator {
    validator: SubmissionValidator,
}

impl DueDateCalculator {
    /// Creates a calculator with the standard validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: SubmissionValidator::new(),
        }
    }

    /// Returns the calendar used for validation and resolution.
    #[must_use]
    pub const fn calendar(&self) -> WorkCalendar {
        self.validator.calendar()
    }

    /// Calculates the due date for a submission and turnaround.
    ///
    /// # Errors
    ///
    /// Returns [`crate::due_date::domain::DueDateError`] when validation
    /// fails or the due date is not representable.
    pub fn calculate_due_date(
        &self,
        submitted_at: NaiveDateTime,
        turnaround_hours: u32,
    ) -> DueDateResult<NaiveDateTime> {
        let validated = self
            .validator
            .validate(submitted_at, turnaround_hours)
            .inspect_err(|err| {
                debug!(
                    %submitted_at,
                    turnaround_hours,
                    kind = err.kind().as_str(),
                    %err,
                    "rejected submission"
                );
            })?;
        Self::resolve_validated(validated)
    }

    /// Calculates the due date for an untyped request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::due_date::domain::DueDateError`] when the request
    /// is missing values, has ill-typed values, or fails calendar checks.
    pub fn calculate_for_request(&self, request: &DueDateRequest) -> DueDateResult<NaiveDateTime> {
        let validated = self
            .validator
            .validate_raw(request.submitted_at(), request.turnaround_hours())
            .inspect_err(|err| {
                debug!(kind = err.kind().as_str(), %err, "rejected request");
            })?;
        Self::resolve_validated(validated)
    }

    /// Calculates the due date for a task submitted at the clock's local time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::due_date::domain::DueDateError`] when the current
    /// time is outside working hours or the turnaround is zero.
    pub fn calculate_due_date_from_now(
        &self,
        turnaround_hours: u32,
        clock: &impl Clock,
    ) -> DueDateResult<NaiveDateTime> {
        self.calculate_due_date(clock.local().naive_local(), turnaround_hours)
    }

    fn resolve_validated(validated: ValidatedSubmission) -> DueDateResult<NaiveDateTime> {
        let submitted_at = validated.submitted_at();
        let turnaround = validated.turnaround();
        let breakdown = turnaround.breakdown();
        let plan = resolver::plan(submitted_at, breakdown);
        let due = resolver::apply(submitted_at, turnaround, plan)?;
        debug!(
            %submitted_at,
            turnaround_hours = turnaround.value(),
            weeks = breakdown.weeks,
            days = plan.days,
            hours = plan.hours,
            rolled_over = plan.rolled_over,
            skipped_weekend = plan.skipped_weekend,
            %due,
            "resolved due date"
        );
        Ok(due)
    }
}

/// Calculates a due date with a default [`DueDateCalculator`].
///
/// # Errors
///
/// See [`DueDateCalculator::calculate_due_date`].
pub fn calculate_due_date(
    submitted_at: NaiveDateTime,
    turnaround_hours: u32,
) -> DueDateResult<NaiveDateTime> {
    DueDateCalculator::new().calculate_due_date(submitted_at, turnaround_hours)
}
