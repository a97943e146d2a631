//! Application services for due date calculation.

mod calculator;
mod request;

pub use calculator::{DueDateCalculator, calculate_due_date};
pub use request::DueDateRequest;
