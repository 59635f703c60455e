//! Then steps for garden lifecycle BDD scenarios.

use super::world::GardenWorld;
use rstest_bdd_macros::then;
use verdant::garden::domain::{GardenOutcome, GardenState};

#[then("the garden is initialized with no blocks")]
fn garden_initialized(world: &GardenWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.outcome != GardenOutcome::Initialized {
        return Err(eyre::eyre!("expected initialized outcome, got {report:?}"));
    }
    let stored = world.stored_garden()?;
    if stored != GardenState::initial(world.today) {
        return Err(eyre::eyre!("expected a freshly planted garden, found {stored:?}"));
    }
    Ok(())
}

#[then("the garden has {blocks:u32} blocks")]
fn garden_has_blocks(world: &GardenWorld, blocks: u32) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let stored = world.stored_garden()?;
    if report.block_count != blocks || stored.block_count() != blocks {
        return Err(eyre::eyre!(
            "expected {blocks} blocks, report has {} and store has {}",
            report.block_count,
            stored.block_count()
        ));
    }
    Ok(())
}

#[then("a block was awarded today")]
fn block_awarded_today(world: &GardenWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if !report.block_awarded {
        return Err(eyre::eyre!("expected a block award, got {report:?}"));
    }
    let stored = world.stored_garden()?;
    if stored.last_block_award_date() != Some(world.today) {
        return Err(eyre::eyre!(
            "expected award dated today, found {:?}",
            stored.last_block_award_date()
        ));
    }
    Ok(())
}

#[then("the garden is dead after {days:u32} inactive days")]
fn garden_dead(world: &GardenWorld, days: u32) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.outcome != (GardenOutcome::Died { days_inactive: days }) {
        return Err(eyre::eyre!("expected death after {days} days, got {report:?}"));
    }
    if !world.stored_garden()?.is_dead() {
        return Err(eyre::eyre!("expected the stored garden to be dead"));
    }
    Ok(())
}

#[then("the garden is alive")]
fn garden_alive(world: &GardenWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let stored = world.stored_garden()?;
    if report.is_dead || stored.is_dead() {
        return Err(eyre::eyre!("expected a living garden, found {stored:?}"));
    }
    if stored.last_block_award_date().is_some() {
        return Err(eyre::eyre!("expected replant to clear the award date"));
    }
    Ok(())
}
