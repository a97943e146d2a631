//! Behaviour tests for due date calculation.

#[path = "due_date_steps/mod.rs"]
mod due_date_steps_defs;

use due_date_steps_defs::world::{DueDateWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Resolve a same-day due date"
)]
fn resolve_same_day(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Roll remaining hours into the next working day"
)]
fn roll_into_next_day(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Skip the weekend after a late Friday submission"
)]
fn skip_weekend_after_friday(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Skip the weekend for a multi-day Friday turnaround"
)]
fn skip_weekend_multi_day(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Skip one weekend per elapsed working week"
)]
fn skip_weekend_per_week(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Accept a submission at the closing instant"
)]
fn accept_closing_instant(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Reject a submission on a Saturday"
)]
fn reject_saturday(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Reject a submission after closing time"
)]
fn reject_after_closing(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Reject a fractional turnaround"
)]
fn reject_fractional_turnaround(world: DueDateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/due_date_calculation.feature",
    name = "Reject a missing turnaround"
)]
fn reject_missing_turnaround(world: DueDateWorld) {
    let _ = world;
}
