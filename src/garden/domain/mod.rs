//! Domain model for the garden lifecycle.
//!
//! Everything here is pure: no I/O, no clock access and no logging. Callers
//! supply "today" explicitly so the lifecycle rules stay deterministic.

mod error;
mod ids;
mod lifecycle;
mod rules;
mod state;
mod task_record;

pub use error::{GardenConfigError, GardenDomainError};
pub use ids::UserId;
pub use lifecycle::{Advance, GardenOutcome, advance, days_inactive, replant};
pub use rules::{AWARD_THRESHOLD_ENV, DEATH_AFTER_DAYS_ENV, GardenRules};
pub use state::{GardenState, PersistedGardenState};
pub use task_record::{DailyCompletion, TaskName, TaskRecord};
