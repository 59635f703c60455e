//! Service layer running the garden lifecycle against injected stores.

use crate::garden::{
    domain::{
        Advance, DailyCompletion, GardenOutcome, GardenRules, GardenState, TaskRecord, UserId,
        advance, replant,
    },
    ports::{GardenRepository, GardenRepositoryError, TaskRecordRepository},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for garden lifecycle operations.
#[derive(Debug, Error)]
pub enum GardenServiceError {
    /// Replanting requires an existing garden.
    #[error("no garden exists for user {0}")]
    GardenNotFound(UserId),
    /// Repository operation failed; nothing was persisted.
    #[error(transparent)]
    Repository(#[from] GardenRepositoryError),
}

/// Result type for garden lifecycle service operations.
pub type GardenServiceResult<T> = Result<T, GardenServiceError>;

/// JSON-ready summary of a lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GardenReport {
    /// Which transition happened.
    #[serde(serialize_with = "serialize_outcome_kind")]
    pub outcome: GardenOutcome,
    /// Block count after the step.
    pub block_count: u32,
    /// Death flag after the step.
    pub is_dead: bool,
    /// Whole days since the previous activity.
    pub days_inactive: u32,
    /// `true` when this step killed (or found dead) the garden.
    pub died: bool,
    /// `true` when this step grew a block.
    pub block_awarded: bool,
    /// Date of the latest lifecycle update.
    pub last_activity: NaiveDate,
}

impl GardenReport {
    /// Builds a report from an engine step.
    #[must_use]
    pub const fn from_advance(step: &Advance) -> Self {
        Self {
            outcome: step.outcome,
            block_count: step.state.block_count(),
            is_dead: step.state.is_dead(),
            days_inactive: step.outcome.days_inactive(),
            died: step.outcome.died(),
            block_awarded: step.outcome.block_awarded(),
            last_activity: step.state.last_activity(),
        }
    }
}

fn serialize_outcome_kind<S: Serializer>(
    outcome: &GardenOutcome,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let kind = match outcome {
        GardenOutcome::Initialized => "initialized",
        GardenOutcome::Died { .. } => "died",
        GardenOutcome::Updated { .. } => "updated",
        GardenOutcome::Replanted => "replanted",
    };
    serializer.serialize_str(kind)
}

/// Garden lifecycle orchestration service.
///
/// Reads one garden row, computes the next state with the pure engine and
/// writes the row back. The read and write are not transactional: two
/// concurrent updates for the same user may race.
#[derive(Clone)]
pub struct GardenLifecycleService<G, T, C>
where
    G: GardenRepository,
    T: TaskRecordRepository,
    C: Clock + Send + Sync,
{
    gardens: Arc<G>,
    tasks: Arc<T>,
    clock: Arc<C>,
    rules: GardenRules,
}

impl<G, T, C> GardenLifecycleService<G, T, C>
where
    G: GardenRepository,
    T: TaskRecordRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default [`GardenRules`].
    #[must_use]
    pub fn new(gardens: Arc<G>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            gardens,
            tasks,
            clock,
            rules: GardenRules::default(),
        }
    }

    /// Replaces the lifecycle rules.
    #[must_use]
    pub const fn with_rules(mut self, rules: GardenRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the lifecycle rules in force.
    #[must_use]
    pub const fn rules(&self) -> GardenRules {
        self.rules
    }

    /// Returns the user's garden, planting one on first access.
    ///
    /// # Errors
    ///
    /// Returns [`GardenServiceError::Repository`] when the lookup or the
    /// initial write fails.
    pub async fn garden(&self, user_id: UserId) -> GardenServiceResult<GardenState> {
        if let Some(state) = self.gardens.find_by_user(user_id).await? {
            debug!(user_id = %user_id, block_count = state.block_count(), "loaded garden");
            return Ok(state);
        }

        let state = GardenState::initial(self.today());
        self.persist(user_id, &state).await?;
        info!(user_id = %user_id, "planted garden on first access");
        Ok(state)
    }

    /// Runs one lifecycle step for today and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`GardenServiceError::Repository`] when reading state or tasks
    /// fails, or when the new state cannot be written. In the latter case the
    /// stored garden is left untouched.
    pub async fn update(&self, user_id: UserId) -> GardenServiceResult<GardenReport> {
        let today = self.today();
        let current = self.gardens.find_by_user(user_id).await?;
        if let Some(state) = current.as_ref()
            && state.last_activity() > today
        {
            warn!(
                user_id = %user_id,
                last_activity = %state.last_activity(),
                today = %today,
                "garden last activity is in the future, treating as zero days inactive"
            );
        }

        let todays_tasks = self.tasks.find_for_day(user_id, today).await?;
        let step = advance(current.as_ref(), today, &todays_tasks, &self.rules);
        self.persist(user_id, &step.state).await?;
        log_outcome(user_id, &step);
        Ok(GardenReport::from_advance(&step))
    }

    /// Resets the user's garden to a fresh planting.
    ///
    /// # Errors
    ///
    /// Returns [`GardenServiceError::GardenNotFound`] when the user has no
    /// garden, or [`GardenServiceError::Repository`] when persistence fails.
    pub async fn replant(&self, user_id: UserId) -> GardenServiceResult<GardenReport> {
        let Some(previous) = self.gardens.find_by_user(user_id).await? else {
            return Err(GardenServiceError::GardenNotFound(user_id));
        };

        let step = replant(self.today());
        self.persist(user_id, &step.state).await?;
        info!(
            user_id = %user_id,
            previous_block_count = previous.block_count(),
            was_dead = previous.is_dead(),
            "replanted garden"
        );
        Ok(GardenReport::from_advance(&step))
    }

    /// Stores a task record against today's date.
    ///
    /// A record with the same name for today is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`GardenServiceError::Repository`] when the write fails.
    pub async fn record_task(&self, user_id: UserId, record: &TaskRecord) -> GardenServiceResult<()> {
        let today = self.today();
        self.tasks.save(user_id, today, record).await?;
        debug!(
            user_id = %user_id,
            task = %record.name(),
            completed = record.completed(),
            "recorded task"
        );
        Ok(())
    }

    /// Returns today's completion figures for the user.
    ///
    /// # Errors
    ///
    /// Returns [`GardenServiceError::Repository`] when the lookup fails.
    pub async fn daily_completion(&self, user_id: UserId) -> GardenServiceResult<DailyCompletion> {
        let records = self.tasks.find_for_day(user_id, self.today()).await?;
        Ok(DailyCompletion::from_records(&records))
    }

    async fn persist(&self, user_id: UserId, state: &GardenState) -> GardenServiceResult<()> {
        self.gardens.save(user_id, state).await.map_err(|err| {
            warn!(user_id = %user_id, error = %err, "failed to persist garden state");
            GardenServiceError::from(err)
        })
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

fn log_outcome(user_id: UserId, step: &Advance) {
    match step.outcome {
        GardenOutcome::Initialized => {
            info!(user_id = %user_id, "planted garden");
        }
        GardenOutcome::Died { days_inactive } => {
            info!(
                user_id = %user_id,
                days_inactive,
                block_count = step.state.block_count(),
                "garden died from inactivity"
            );
        }
        GardenOutcome::Updated {
            block_count,
            days_inactive,
            block_awarded: true,
        } => {
            info!(user_id = %user_id, block_count, days_inactive, "awarded garden block");
        }
        GardenOutcome::Updated {
            block_count,
            days_inactive,
            block_awarded: false,
        } => {
            debug!(user_id = %user_id, block_count, days_inactive, "updated garden");
        }
        GardenOutcome::Replanted => {
            info!(user_id = %user_id, "replanted garden");
        }
    }
}
