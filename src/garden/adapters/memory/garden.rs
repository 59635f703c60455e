//! In-memory garden state repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::poisoned;
use crate::garden::{
    domain::{GardenState, UserId},
    ports::{GardenRepository, GardenRepositoryResult},
};

/// Thread-safe in-memory garden repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGardenRepository {
    gardens: Arc<RwLock<HashMap<UserId, GardenState>>>,
}

impl InMemoryGardenRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GardenRepository for InMemoryGardenRepository {
    async fn find_by_user(&self, user_id: UserId) -> GardenRepositoryResult<Option<GardenState>> {
        let gardens = self.gardens.read().map_err(|err| poisoned(&err))?;
        Ok(gardens.get(&user_id).copied())
    }

    async fn save(&self, user_id: UserId, state: &GardenState) -> GardenRepositoryResult<()> {
        let mut gardens = self.gardens.write().map_err(|err| poisoned(&err))?;
        gardens.insert(user_id, *state);
        Ok(())
    }
}
