//! Tunable thresholds for the garden lifecycle.

use super::{GardenConfigError, GardenDomainError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Environment variable overriding [`GardenRules::award_threshold_percent`].
pub const AWARD_THRESHOLD_ENV: &str = "VERDANT_AWARD_THRESHOLD_PERCENT";

/// Environment variable overriding [`GardenRules::death_after_inactive_days`].
pub const DEATH_AFTER_DAYS_ENV: &str = "VERDANT_DEATH_AFTER_INACTIVE_DAYS";

/// Thresholds applied by the lifecycle engine.
///
/// # Examples
///
/// ```
/// use verdant::garden::domain::GardenRules;
///
/// let rules = GardenRules::default();
/// assert_eq!(rules.award_threshold_percent(), 60);
/// assert_eq!(rules.death_after_inactive_days(), 3);
///
/// assert!(GardenRules::new(101, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGardenRules")]
pub struct GardenRules {
    award_threshold_percent: u8,
    death_after_inactive_days: u32,
}

impl GardenRules {
    /// Default minimum completion percentage that earns a block.
    pub const DEFAULT_AWARD_THRESHOLD_PERCENT: u8 = 60;

    /// Default number of inactive days after which a garden dies.
    pub const DEFAULT_DEATH_AFTER_INACTIVE_DAYS: u32 = 3;

    /// Creates validated rules.
    ///
    /// # Errors
    ///
    /// Returns [`GardenDomainError::InvalidRules`] when the threshold exceeds
    /// 100 or the death window is zero days.
    pub fn new(
        award_threshold_percent: u8,
        death_after_inactive_days: u32,
    ) -> Result<Self, GardenDomainError> {
        if award_threshold_percent > 100 {
            return Err(GardenDomainError::InvalidRules(format!(
                "award threshold {award_threshold_percent}% exceeds 100%"
            )));
        }
        if death_after_inactive_days == 0 {
            return Err(GardenDomainError::InvalidRules(
                "death window must be at least one day".to_owned(),
            ));
        }
        Ok(Self {
            award_threshold_percent,
            death_after_inactive_days,
        })
    }

    /// Loads rules from `VERDANT_*` environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GardenConfigError`] when a variable is set to a value that
    /// does not parse or produces out-of-range rules.
    pub fn from_env() -> Result<Self, GardenConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads rules through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`GardenRules::from_env`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, GardenConfigError> {
        let threshold = load(
            &lookup,
            AWARD_THRESHOLD_ENV,
            Self::DEFAULT_AWARD_THRESHOLD_PERCENT,
        )?;
        let death_after = load(
            &lookup,
            DEATH_AFTER_DAYS_ENV,
            Self::DEFAULT_DEATH_AFTER_INACTIVE_DAYS,
        )?;
        Ok(Self::new(threshold, death_after)?)
    }

    /// Returns the inclusive completion percentage that earns a block.
    #[must_use]
    pub const fn award_threshold_percent(self) -> u8 {
        self.award_threshold_percent
    }

    /// Returns the inactivity window, in days, that kills a growing garden.
    #[must_use]
    pub const fn death_after_inactive_days(self) -> u32 {
        self.death_after_inactive_days
    }
}

impl Default for GardenRules {
    fn default() -> Self {
        Self {
            award_threshold_percent: Self::DEFAULT_AWARD_THRESHOLD_PERCENT,
            death_after_inactive_days: Self::DEFAULT_DEATH_AFTER_INACTIVE_DAYS,
        }
    }
}

fn load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, GardenConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        tracing::info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    raw.trim()
        .parse()
        .map_err(|err: T::Err| GardenConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: err.to_string(),
        })
}

/// Unvalidated serde shape; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawGardenRules {
    award_threshold_percent: u8,
    death_after_inactive_days: u32,
}

impl Default for RawGardenRules {
    fn default() -> Self {
        Self {
            award_threshold_percent: GardenRules::DEFAULT_AWARD_THRESHOLD_PERCENT,
            death_after_inactive_days: GardenRules::DEFAULT_DEATH_AFTER_INACTIVE_DAYS,
        }
    }
}

impl TryFrom<RawGardenRules> for GardenRules {
    type Error = GardenDomainError;

    fn try_from(raw: RawGardenRules) -> Result<Self, Self::Error> {
        Self::new(raw.award_threshold_percent, raw.death_after_inactive_days)
    }
}
