//! Error types for garden domain validation and configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing garden domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GardenDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// A persisted garden claims a block award after its last activity.
    #[error("block award date {award} is after last activity {last_activity}")]
    AwardAfterActivity {
        /// Date of the most recent block award.
        award: NaiveDate,
        /// Date of the most recent lifecycle update.
        last_activity: NaiveDate,
    },

    /// The lifecycle rules are out of range.
    #[error("invalid garden rules: {0}")]
    InvalidRules(String),
}

/// Errors returned while loading garden rules from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GardenConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name.
        key: &'static str,
        /// Raw value found in the environment.
        value: String,
        /// Parser error message.
        reason: String,
    },

    /// The parsed values do not form valid rules.
    #[error(transparent)]
    Rules(#[from] GardenDomainError),
}
