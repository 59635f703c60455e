//! Persisted garden state, one record per user.

use super::GardenDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Growth state of a user's garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenState {
    block_count: u32,
    is_dead: bool,
    last_activity: NaiveDate,
    last_block_award_date: Option<NaiveDate>,
}

/// Parameter object for reconstructing a persisted garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedGardenState {
    /// Persisted number of blocks.
    pub block_count: u32,
    /// Persisted death flag.
    pub is_dead: bool,
    /// Persisted date of the latest lifecycle update.
    pub last_activity: NaiveDate,
    /// Persisted date of the latest block award, if any.
    pub last_block_award_date: Option<NaiveDate>,
}

impl GardenState {
    /// Creates a freshly planted garden.
    #[must_use]
    pub const fn initial(today: NaiveDate) -> Self {
        Self {
            block_count: 0,
            is_dead: false,
            last_activity: today,
            last_block_award_date: None,
        }
    }

    /// Reconstructs a garden from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`GardenDomainError::AwardAfterActivity`] when the award date
    /// is later than the last activity date.
    pub fn from_persisted(data: PersistedGardenState) -> Result<Self, GardenDomainError> {
        if let Some(award) = data.last_block_award_date
            && award > data.last_activity
        {
            return Err(GardenDomainError::AwardAfterActivity {
                award,
                last_activity: data.last_activity,
            });
        }
        Ok(Self {
            block_count: data.block_count,
            is_dead: data.is_dead,
            last_activity: data.last_activity,
            last_block_award_date: data.last_block_award_date,
        })
    }

    /// Returns the number of blocks grown so far.
    #[must_use]
    pub const fn block_count(&self) -> u32 {
        self.block_count
    }

    /// Returns `true` when the garden has died and awaits a replant.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Returns the date of the latest lifecycle update.
    #[must_use]
    pub const fn last_activity(&self) -> NaiveDate {
        self.last_activity
    }

    /// Returns the date of the latest block award.
    #[must_use]
    pub const fn last_block_award_date(&self) -> Option<NaiveDate> {
        self.last_block_award_date
    }

    pub(super) const fn mark_dead(&mut self) {
        self.is_dead = true;
    }

    /// Awards a block unless one was already awarded on `today`.
    ///
    /// Returns `true` when the block count changed.
    pub(super) fn award_block(&mut self, today: NaiveDate) -> bool {
        if self.last_block_award_date == Some(today) {
            return false;
        }
        self.block_count = self.block_count.saturating_add(1);
        self.last_block_award_date = Some(today);
        true
    }

    /// Records activity on `today` and revives the garden.
    ///
    /// A future-dated `last_activity` is kept so the award date never
    /// overtakes it.
    pub(super) fn touch(&mut self, today: NaiveDate) {
        self.last_activity = self.last_activity.max(today);
        self.is_dead = false;
    }
}
