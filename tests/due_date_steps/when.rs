//! When steps for due date calculation BDD scenarios.

use super::world::DueDateWorld;
use rstest_bdd_macros::when;

#[when("the due date is calculated")]
fn due_date_is_calculated(world: &mut DueDateWorld) {
    let result = world
        .calculator
        .calculate_for_request(&world.pending_request);
    world.last_result = Some(result);
}
