//! Domain model for due date calculation.
//!
//! Holds the fixed working calendar, the validated turnaround value, the
//! resolver that walks a submission forward across working hours, and the
//! error types shared by every layer.

mod calendar;
mod error;
pub mod resolver;
mod turnaround;

pub use calendar::WorkCalendar;
pub use error::{DueDateError, DueDateErrorKind, DueDateResult};
pub use resolver::{Resolution, resolve};
pub use turnaround::{TurnaroundBreakdown, TurnaroundHours};
