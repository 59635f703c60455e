//! In-memory daily task record repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::poisoned;
use crate::garden::{
    domain::{TaskName, TaskRecord, UserId},
    ports::{GardenRepositoryResult, TaskRecordRepository},
};

/// Records for one user on one day, keyed by task name.
type DayRecords = BTreeMap<TaskName, TaskRecord>;

/// Thread-safe in-memory task record repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRecordRepository {
    days: Arc<RwLock<HashMap<(UserId, NaiveDate), DayRecords>>>,
}

impl InMemoryTaskRecordRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRecordRepository for InMemoryTaskRecordRepository {
    async fn find_for_day(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> GardenRepositoryResult<Vec<TaskRecord>> {
        let days = self.days.read().map_err(|err| poisoned(&err))?;
        Ok(days
            .get(&(user_id, date))
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn save(
        &self,
        user_id: UserId,
        date: NaiveDate,
        record: &TaskRecord,
    ) -> GardenRepositoryResult<()> {
        let mut days = self.days.write().map_err(|err| poisoned(&err))?;
        days.entry((user_id, date))
            .or_default()
            .insert(record.name().clone(), record.clone());
        Ok(())
    }
}
