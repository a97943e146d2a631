//! Shared world state for due date calculation BDD scenarios.

use chrono::NaiveDateTime;
use due_date_calculator::{DueDateCalculator, DueDateRequest, DueDateResult};
use rstest::fixture;

/// Scenario world for due date behaviour tests.
pub struct DueDateWorld {
    pub calculator: DueDateCalculator,
    pub pending_request: DueDateRequest,
    pub last_result: Option<DueDateResult<NaiveDateTime>>,
}

impl DueDateWorld {
    /// Creates a world with an empty pending request.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: DueDateCalculator::new(),
            pending_request: DueDateRequest::default(),
            last_result: None,
        }
    }
}

impl Default for DueDateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DueDateWorld {
    DueDateWorld::default()
}
