//! Given steps for due date calculation BDD scenarios.

use super::world::DueDateWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::Value;

#[given(r#"a task submitted at "{submitted_at}""#)]
fn task_submitted_at(world: &mut DueDateWorld, submitted_at: String) {
    world.pending_request = world
        .pending_request
        .clone()
        .with_submitted_at(submitted_at);
}

#[given("a turnaround of {hours:u32} working hours")]
fn turnaround_of(world: &mut DueDateWorld, hours: u32) {
    world.pending_request = world.pending_request.clone().with_turnaround_hours(hours);
}

#[given(r#"a raw turnaround of "{raw}""#)]
fn raw_turnaround_of(world: &mut DueDateWorld, raw: String) -> Result<(), eyre::Report> {
    let value: Value =
        serde_json::from_str(&raw).wrap_err("parse raw turnaround as a JSON value")?;
    world.pending_request = world.pending_request.clone().with_turnaround_hours(value);
    Ok(())
}
