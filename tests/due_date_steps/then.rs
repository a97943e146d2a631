//! Then steps for due date calculation BDD scenarios.

use super::world::DueDateWorld;
use chrono::NaiveDateTime;
use due_date_calculator::{DueDateErrorKind, DueDateResult};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn last_result(world: &DueDateWorld) -> Result<&DueDateResult<NaiveDateTime>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing calculation result"))
}

fn expect_failure_kind(
    world: &DueDateWorld,
    expected: DueDateErrorKind,
) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!(
            "expected {} failure, got {other:?}",
            expected.as_str()
        )),
    }
}

#[then(r#"the task is due at "{due}""#)]
fn task_is_due_at(world: &DueDateWorld, due: String) -> Result<(), eyre::Report> {
    let expected = NaiveDateTime::parse_from_str(&due, "%Y-%m-%dT%H:%M:%S")
        .wrap_err("parse expected due date in scenario")?;

    match last_result(world)? {
        Ok(actual) if *actual == expected => Ok(()),
        other => Err(eyre::eyre!("expected due date {expected}, got {other:?}")),
    }
}

#[then("the calculation fails with an invalid submission window error")]
fn fails_with_invalid_submission_window(world: &DueDateWorld) -> Result<(), eyre::Report> {
    expect_failure_kind(world, DueDateErrorKind::InvalidSubmissionWindow)
}

#[then("the calculation fails with an invalid parameters error")]
fn fails_with_invalid_parameters(world: &DueDateWorld) -> Result<(), eyre::Report> {
    expect_failure_kind(world, DueDateErrorKind::InvalidParameters)
}
