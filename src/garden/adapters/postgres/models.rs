//! Diesel row models for garden persistence.

use super::schema::{garden_states, task_records};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Row for the `garden_states` table, used for both reads and upserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = garden_states)]
#[diesel(primary_key(user_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GardenRow {
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Number of blocks grown.
    pub block_count: i32,
    /// Death flag.
    pub is_dead: bool,
    /// Date of the latest lifecycle update.
    pub last_activity: NaiveDate,
    /// Date of the latest block award; cleared on replant.
    pub last_block_award_date: Option<NaiveDate>,
}

/// Query result row for daily task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRecordRow {
    /// Task name.
    pub name: String,
    /// Completion count.
    pub completed: i32,
    /// Accumulated focus time in seconds.
    pub focus_seconds: Option<i64>,
}

/// Insert model for daily task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_records)]
pub struct NewTaskRecordRow {
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Day the task belongs to.
    pub task_date: NaiveDate,
    /// Task name.
    pub name: String,
    /// Completion count.
    pub completed: i32,
    /// Accumulated focus time in seconds.
    pub focus_seconds: Option<i64>,
}
