//! Step definitions for due date calculation BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
