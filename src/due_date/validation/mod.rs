//! Input validation for the due date calculator.
//!
//! This module provides the individual rules and the fail-fast composite
//! validator that runs before any date arithmetic.

pub mod rules;
pub mod service;

pub use service::{SubmissionValidator, ValidatedSubmission};
