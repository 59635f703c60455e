//! The garden lifecycle engine.
//!
//! [`advance`] computes the next garden state from the stored state and the
//! day's task records. It is total: every input yields a state and an
//! outcome, and nothing here touches storage.

use super::{DailyCompletion, GardenRules, GardenState, TaskRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User-facing result of a lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GardenOutcome {
    /// No garden existed; a fresh one was planted.
    Initialized,
    /// The garden went unattended for too long and died.
    Died {
        /// Whole days since the last recorded activity.
        days_inactive: u32,
    },
    /// The garden was updated for today.
    Updated {
        /// Block count after the update.
        block_count: u32,
        /// Whole days since the previous activity.
        days_inactive: u32,
        /// Whether this step grew a new block.
        block_awarded: bool,
    },
    /// The garden was reset by a replant.
    Replanted,
}

impl GardenOutcome {
    /// Returns `true` for [`GardenOutcome::Died`].
    #[must_use]
    pub const fn died(self) -> bool {
        matches!(self, Self::Died { .. })
    }

    /// Returns the inactivity measured by this step, zero when none applies.
    #[must_use]
    pub const fn days_inactive(self) -> u32 {
        match self {
            Self::Died { days_inactive } | Self::Updated { days_inactive, .. } => days_inactive,
            Self::Initialized | Self::Replanted => 0,
        }
    }

    /// Returns `true` when this step grew a block.
    #[must_use]
    pub const fn block_awarded(self) -> bool {
        matches!(
            self,
            Self::Updated {
                block_awarded: true,
                ..
            }
        )
    }
}

/// Next state and outcome produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// State to persist.
    pub state: GardenState,
    /// What happened, for the caller to report.
    pub outcome: GardenOutcome,
}

/// Whole days between `last_activity` and `today`.
///
/// A `last_activity` in the future counts as zero days.
#[must_use]
pub fn days_inactive(last_activity: NaiveDate, today: NaiveDate) -> u32 {
    let days = today.signed_duration_since(last_activity).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Advances a garden by one lifecycle step.
///
/// With no stored state the garden is planted. Otherwise a garden that has
/// blocks and has been inactive for the configured window dies; any other
/// garden is revived, dated today and, when today's completion meets the
/// threshold, awarded at most one block per calendar day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use verdant::garden::domain::{GardenOutcome, GardenRules, advance};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default();
/// let planted = advance(None, today, &[], &GardenRules::default());
///
/// assert_eq!(planted.outcome, GardenOutcome::Initialized);
/// assert_eq!(planted.state.block_count(), 0);
/// ```
#[must_use]
pub fn advance(
    state: Option<&GardenState>,
    today: NaiveDate,
    todays_tasks: &[TaskRecord],
    rules: &GardenRules,
) -> Advance {
    let Some(current) = state else {
        return Advance {
            state: GardenState::initial(today),
            outcome: GardenOutcome::Initialized,
        };
    };

    let inactive = days_inactive(current.last_activity(), today);
    let expired = inactive >= rules.death_after_inactive_days() && current.block_count() > 0;
    if expired || current.is_dead() {
        let mut next = *current;
        next.mark_dead();
        return Advance {
            state: next,
            outcome: GardenOutcome::Died {
                days_inactive: inactive,
            },
        };
    }

    let mut next = *current;
    let completion = DailyCompletion::from_records(todays_tasks);
    let block_awarded =
        completion.meets_threshold(rules.award_threshold_percent()) && next.award_block(today);
    next.touch(today);

    Advance {
        state: next,
        outcome: GardenOutcome::Updated {
            block_count: next.block_count(),
            days_inactive: inactive,
            block_awarded,
        },
    }
}

/// Resets a garden to its freshly planted state, whatever it held before.
#[must_use]
pub const fn replant(today: NaiveDate) -> Advance {
    Advance {
        state: GardenState::initial(today),
        outcome: GardenOutcome::Replanted,
    }
}
