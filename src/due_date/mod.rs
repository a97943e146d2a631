//! Due date calculation over a fixed working calendar.
//!
//! Given a submission timestamp and a turnaround in working hours, the
//! calculator validates that the submission falls on a working day within
//! working hours and then walks the turnaround forward across the
//! Monday-to-Friday, 09:00-to-17:00 calendar. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the resolver in [`domain`]
//! - Input rules and the composite validator in [`validation`]
//! - The calculator service in [`services`]

pub mod domain;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
