//! Untyped request payload for due date calculation.

use crate::due_date::domain::{DueDateError, DueDateResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw calculator inputs as received from an untyped source.
///
/// Both fields default to `null` when absent so that missing values are
/// reported by validation rather than by deserialisation.
///
/// # Examples
///
/// ```
/// use due_date_calculator::due_date::services::DueDateRequest;
///
/// let request = DueDateRequest::from_json_str(
///     r#"{"submitted_at": "2019-09-11T12:38:00", "turnaround_hours": 6}"#,
/// )
/// .expect("valid JSON");
/// assert_eq!(request.turnaround_hours(), &serde_json::json!(6));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DueDateRequest {
    #[serde(default)]
    submitted_at: Value,
    #[serde(default)]
    turnaround_hours: Value,
}

impl DueDateRequest {
    /// Creates a request from raw values.
    #[must_use]
    pub fn new(submitted_at: impl Into<Value>, turnaround_hours: impl Into<Value>) -> Self {
        Self {
            submitted_at: submitted_at.into(),
            turnaround_hours: turnaround_hours.into(),
        }
    }

    /// Parses a request from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::MalformedSubmission`] when the document is not
    /// valid JSON or is not a JSON object.
    pub fn from_json_str(json: &str) -> DueDateResult<Self> {
        let invalid =
            |reason: String| DueDateError::MalformedSubmission(format!("invalid request: {reason}"));
        let document: Value =
            serde_json::from_str(json).map_err(|err| invalid(err.to_string()))?;
        if !document.is_object() {
            return Err(invalid(format!("expected a JSON object, got {document}")));
        }
        serde_json::from_value(document).map_err(|err| invalid(err.to_string()))
    }

    /// Sets the submission value.
    #[must_use]
    pub fn with_submitted_at(mut self, submitted_at: impl Into<Value>) -> Self {
        self.submitted_at = submitted_at.into();
        self
    }

    /// Sets the turnaround value.
    #[must_use]
    pub fn with_turnaround_hours(mut self, turnaround_hours: impl Into<Value>) -> Self {
        self.turnaround_hours = turnaround_hours.into();
        self
    }

    /// Returns the raw submission value.
    #[must_use]
    pub const fn submitted_at(&self) -> &Value {
        &self.submitted_at
    }

    /// Returns the raw turnaround value.
    #[must_use]
    pub const fn turnaround_hours(&self) -> &Value {
        &self.turnaround_hours
    }
}
