//! Repository ports for garden state and daily task records.

use crate::garden::domain::{GardenDomainError, GardenState, TaskRecord, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for garden repository operations.
pub type GardenRepositoryResult<T> = Result<T, GardenRepositoryError>;

/// Garden state persistence contract, one row per user.
#[async_trait]
pub trait GardenRepository: Send + Sync {
    /// Finds the garden owned by `user_id`.
    ///
    /// Returns `None` when the user has never had a garden.
    async fn find_by_user(&self, user_id: UserId) -> GardenRepositoryResult<Option<GardenState>>;

    /// Inserts or replaces the garden owned by `user_id`.
    ///
    /// The whole row is written or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`GardenRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn save(&self, user_id: UserId, state: &GardenState) -> GardenRepositoryResult<()>;
}

/// Daily task record persistence contract.
#[async_trait]
pub trait TaskRecordRepository: Send + Sync {
    /// Returns the user's task records for `date`, ordered by task name.
    async fn find_for_day(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> GardenRepositoryResult<Vec<TaskRecord>>;

    /// Inserts or replaces the record with the same task name on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`GardenRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn save(
        &self,
        user_id: UserId,
        date: NaiveDate,
        record: &TaskRecord,
    ) -> GardenRepositoryResult<()>;
}

/// Errors returned by garden repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GardenRepositoryError {
    /// A stored row could not be turned back into a domain value.
    #[error("invalid stored record: {0}")]
    InvalidRecord(#[from] GardenDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GardenRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
