//! `PostgreSQL` repository implementations for garden storage.

use super::{
    models::{GardenRow, NewTaskRecordRow, TaskRecordRow},
    schema::{garden_states, task_records},
};
use crate::garden::{
    domain::{GardenState, PersistedGardenState, TaskName, TaskRecord, UserId},
    ports::{
        GardenRepository, GardenRepositoryError, GardenRepositoryResult, TaskRecordRepository,
    },
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::upsert::excluded;

/// `PostgreSQL` connection pool type used by garden adapters.
pub type GardenPgPool = Pool<ConnectionManager<PgConnection>>;

async fn run_blocking<F, T>(pool: &GardenPgPool, f: F) -> GardenRepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> GardenRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(GardenRepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(GardenRepositoryError::persistence)?
}

/// `PostgreSQL`-backed garden state repository.
#[derive(Debug, Clone)]
pub struct PostgresGardenRepository {
    pool: GardenPgPool,
}

impl PostgresGardenRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GardenPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GardenRepository for PostgresGardenRepository {
    async fn find_by_user(&self, user_id: UserId) -> GardenRepositoryResult<Option<GardenState>> {
        run_blocking(&self.pool, move |connection| {
            let row = garden_states::table
                .filter(garden_states::user_id.eq(user_id.into_inner()))
                .select(GardenRow::as_select())
                .first::<GardenRow>(connection)
                .optional()
                .map_err(GardenRepositoryError::persistence)?;
            row.map(row_to_garden).transpose()
        })
        .await
    }

    async fn save(&self, user_id: UserId, state: &GardenState) -> GardenRepositoryResult<()> {
        let row = to_garden_row(user_id, state)?;
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(garden_states::table)
                .values(&row)
                .on_conflict(garden_states::user_id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(GardenRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

/// `PostgreSQL`-backed daily task record repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRecordRepository {
    pool: GardenPgPool,
}

impl PostgresTaskRecordRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GardenPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRecordRepository for PostgresTaskRecordRepository {
    async fn find_for_day(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> GardenRepositoryResult<Vec<TaskRecord>> {
        run_blocking(&self.pool, move |connection| {
            let rows = task_records::table
                .filter(task_records::user_id.eq(user_id.into_inner()))
                .filter(task_records::task_date.eq(date))
                .order(task_records::name.asc())
                .select(TaskRecordRow::as_select())
                .load::<TaskRecordRow>(connection)
                .map_err(GardenRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task_record).collect()
        })
        .await
    }

    async fn save(
        &self,
        user_id: UserId,
        date: NaiveDate,
        record: &TaskRecord,
    ) -> GardenRepositoryResult<()> {
        let row = to_task_record_row(user_id, date, record)?;
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(task_records::table)
                .values(&row)
                .on_conflict((
                    task_records::user_id,
                    task_records::task_date,
                    task_records::name,
                ))
                .do_update()
                .set((
                    task_records::completed.eq(excluded(task_records::completed)),
                    task_records::focus_seconds.eq(excluded(task_records::focus_seconds)),
                ))
                .execute(connection)
                .map_err(GardenRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_garden_row(user_id: UserId, state: &GardenState) -> GardenRepositoryResult<GardenRow> {
    let block_count =
        i32::try_from(state.block_count()).map_err(GardenRepositoryError::persistence)?;
    Ok(GardenRow {
        user_id: user_id.into_inner(),
        block_count,
        is_dead: state.is_dead(),
        last_activity: state.last_activity(),
        last_block_award_date: state.last_block_award_date(),
    })
}

fn row_to_garden(row: GardenRow) -> GardenRepositoryResult<GardenState> {
    let block_count =
        u32::try_from(row.block_count).map_err(GardenRepositoryError::persistence)?;
    let state = GardenState::from_persisted(PersistedGardenState {
        block_count,
        is_dead: row.is_dead,
        last_activity: row.last_activity,
        last_block_award_date: row.last_block_award_date,
    })?;
    Ok(state)
}

fn to_task_record_row(
    user_id: UserId,
    date: NaiveDate,
    record: &TaskRecord,
) -> GardenRepositoryResult<NewTaskRecordRow> {
    let completed = i32::try_from(record.completed()).map_err(GardenRepositoryError::persistence)?;
    let focus_seconds = record
        .focus_seconds()
        .map(i64::try_from)
        .transpose()
        .map_err(GardenRepositoryError::persistence)?;
    Ok(NewTaskRecordRow {
        user_id: user_id.into_inner(),
        task_date: date,
        name: record.name().as_str().to_owned(),
        completed,
        focus_seconds,
    })
}

fn row_to_task_record(row: TaskRecordRow) -> GardenRepositoryResult<TaskRecord> {
    let TaskRecordRow {
        name,
        completed,
        focus_seconds,
    } = row;

    let task_name = TaskName::new(name)?;
    let completed_count = u32::try_from(completed).map_err(GardenRepositoryError::persistence)?;
    let record = TaskRecord::new(task_name, completed_count);
    match focus_seconds {
        Some(seconds) => {
            let focus = u64::try_from(seconds).map_err(GardenRepositoryError::persistence)?;
            Ok(record.with_focus_seconds(focus))
        }
        None => Ok(record),
    }
}
