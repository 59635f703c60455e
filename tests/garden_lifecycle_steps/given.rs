//! Given steps for garden lifecycle BDD scenarios.

use super::world::{GardenWorld, run_async};
use chrono::{Days, NaiveDate};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use verdant::garden::{
    domain::{GardenState, PersistedGardenState, TaskName, TaskRecord},
    ports::GardenRepository,
};

fn days_ago(world: &GardenWorld, days: u64) -> Result<NaiveDate, eyre::Report> {
    world
        .today
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| eyre::eyre!("{days} days before today is out of range"))
}

fn seed(world: &GardenWorld, data: PersistedGardenState) -> Result<(), eyre::Report> {
    let state = GardenState::from_persisted(data).wrap_err("build seeded garden")?;
    run_async(world.gardens.save(world.user_id, &state)).wrap_err("seed garden")?;
    Ok(())
}

#[given("a user without a garden")]
fn user_without_garden(world: &mut GardenWorld) {
    world.last_report = None;
}

#[given("a garden with {blocks:u32} blocks last active {days:u64} days ago")]
fn garden_last_active(
    world: &mut GardenWorld,
    blocks: u32,
    days: u64,
) -> Result<(), eyre::Report> {
    let last_activity = days_ago(world, days)?;
    seed(
        world,
        PersistedGardenState {
            block_count: blocks,
            is_dead: false,
            last_activity,
            last_block_award_date: None,
        },
    )
}

#[given("a garden with {blocks:u32} blocks last awarded a block {days:u64} days ago")]
fn garden_last_awarded(
    world: &mut GardenWorld,
    blocks: u32,
    days: u64,
) -> Result<(), eyre::Report> {
    let awarded_on = days_ago(world, days)?;
    seed(
        world,
        PersistedGardenState {
            block_count: blocks,
            is_dead: false,
            last_activity: awarded_on,
            last_block_award_date: Some(awarded_on),
        },
    )
}

#[given("a dead garden with {blocks:u32} blocks")]
fn dead_garden(world: &mut GardenWorld, blocks: u32) -> Result<(), eyre::Report> {
    let last_activity = days_ago(world, 4)?;
    seed(
        world,
        PersistedGardenState {
            block_count: blocks,
            is_dead: true,
            last_activity,
            last_block_award_date: Some(last_activity),
        },
    )
}

#[given("{total:u32} tasks today of which {completed:u32} are completed")]
fn tasks_today(world: &mut GardenWorld, total: u32, completed: u32) -> Result<(), eyre::Report> {
    for index in 0..total {
        let name = TaskName::new(format!("task-{index}")).wrap_err("build task name")?;
        let record = TaskRecord::new(name, u32::from(index < completed));
        run_async(world.service.record_task(world.user_id, &record)).wrap_err("record task")?;
    }
    Ok(())
}
