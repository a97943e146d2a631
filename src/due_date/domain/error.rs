//! Error types for due date validation and resolution.

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure category observable by callers.
///
/// Weekend submissions and out-of-hours submissions share the
/// [`DueDateErrorKind::InvalidSubmissionWindow`] category; everything that is
/// wrong with the shape or range of the inputs is
/// [`DueDateErrorKind::InvalidParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateErrorKind {
    /// An input is missing, has the wrong type, or is out of range.
    InvalidParameters,
    /// The submission falls outside the working days or working hours.
    InvalidSubmissionWindow,
}

impl DueDateErrorKind {
    /// Returns the canonical snake-case representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParameters => "invalid_parameters",
            Self::InvalidSubmissionWindow => "invalid_submission_window",
        }
    }
}

/// Errors returned while validating inputs or resolving a due date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DueDateError {
    /// No submission timestamp was supplied.
    #[error("submission timestamp is required")]
    MissingSubmission,

    /// No turnaround was supplied.
    #[error("turnaround hours are required")]
    MissingTurnaround,

    /// The submission is not a well-formed date-time value.
    #[error("malformed submission timestamp: {0}")]
    MalformedSubmission(String),

    /// The turnaround is not an integer value.
    #[error("turnaround must be a whole number of hours, got {0}")]
    NonIntegerTurnaround(String),

    /// The turnaround is zero or negative.
    #[error("turnaround must be a positive number of hours, got {0}")]
    NonPositiveTurnaround(i64),

    /// The turnaround does not fit the supported hour range.
    #[error("turnaround of {0} hours exceeds the supported maximum")]
    TurnaroundTooLarge(u64),

    /// The submission falls on a weekend.
    #[error("submission on {weekday:?} is outside the working week")]
    NonWorkingDay {
        /// Day of week of the rejected submission.
        weekday: Weekday,
    },

    /// The submission falls outside the daily working window.
    #[error("submission at {time} is outside working hours")]
    OutsideWorkingHours {
        /// Time of day of the rejected submission.
        time: NaiveTime,
    },

    /// The resolved due date cannot be represented.
    #[error("due date for submission {submitted_at} plus {turnaround_hours} hours is out of range")]
    DueDateOutOfRange {
        /// The validated submission timestamp.
        submitted_at: NaiveDateTime,
        /// The requested turnaround.
        turnaround_hours: u32,
    },
}

impl DueDateError {
    /// Returns the failure category for this error.
    #[must_use]
    pub const fn kind(&self) -> DueDateErrorKind {
        match self {
            Self::NonWorkingDay { .. } | Self::OutsideWorkingHours { .. } => {
                DueDateErrorKind::InvalidSubmissionWindow
            }
            Self::MissingSubmission
            | Self::MissingTurnaround
            | Self::MalformedSubmission(_)
            | Self::NonIntegerTurnaround(_)
            | Self::NonPositiveTurnaround(_)
            | Self::TurnaroundTooLarge(_)
            | Self::DueDateOutOfRange { .. } => DueDateErrorKind::InvalidParameters,
        }
    }
}

/// Result type for due date operations.
pub type DueDateResult<T> = Result<T, DueDateError>;
