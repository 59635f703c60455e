//! When steps for garden lifecycle BDD scenarios.

use super::world::{GardenWorld, run_async};
use rstest_bdd_macros::when;

#[when("the garden is updated")]
fn update_garden(world: &mut GardenWorld) {
    world.last_report = Some(run_async(world.service.update(world.user_id)));
}

#[when("the garden is replanted")]
fn replant_garden(world: &mut GardenWorld) {
    world.last_report = Some(run_async(world.service.replant(world.user_id)));
}
