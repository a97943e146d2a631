//! Due date calculation for tasks submitted during working hours.
//!
//! Given a submission timestamp and a turnaround in whole working hours, this
//! crate resolves when the task is due under a fixed business calendar:
//! Monday to Friday, 09:00 to 17:00, no holidays.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the working calendar, turnaround values, and the resolver
//! - **Validation**: fail-fast rules run before any date arithmetic
//! - **Services**: the calculator entry points composing both
//!
//! # Modules
//!
//! - [`due_date`]: submission validation and due date resolution

pub mod due_date;

pub use due_date::{
    domain::{DueDateError, DueDateErrorKind, DueDateResult},
    services::{DueDateCalculator, DueDateRequest, calculate_due_date},
};
