//! Daily task records and the completion figures derived from them.

use super::GardenDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed task name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`GardenDomainError::EmptyTaskName`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, GardenDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GardenDomainError::EmptyTaskName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the task name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskName {
    type Error = GardenDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(name: TaskName) -> Self {
        name.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked task for one user on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    name: TaskName,
    completed: u32,
    focus_seconds: Option<u64>,
}

impl TaskRecord {
    /// Creates a task record with the given completion count.
    #[must_use]
    pub const fn new(name: TaskName, completed: u32) -> Self {
        Self {
            name,
            completed,
            focus_seconds: None,
        }
    }

    /// Sets the focus-time accumulator.
    #[must_use]
    pub const fn with_focus_seconds(mut self, seconds: u64) -> Self {
        self.focus_seconds = Some(seconds);
        self
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns how many times the task was completed today.
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Returns accumulated focus time in seconds, if any was tracked.
    #[must_use]
    pub const fn focus_seconds(&self) -> Option<u64> {
        self.focus_seconds
    }

    /// Returns `true` when the task has a positive completion count.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed > 0
    }

    /// Increments the completion count.
    pub const fn record_completion(&mut self) {
        self.completed = self.completed.saturating_add(1);
    }

    /// Adds focus time, starting the accumulator if it was never used.
    pub fn add_focus(&mut self, seconds: u64) {
        let current = self.focus_seconds.unwrap_or_default();
        self.focus_seconds = Some(current.saturating_add(seconds));
    }
}

/// Completion figures for one user's tasks on one day.
///
/// # Examples
///
/// ```
/// use verdant::garden::domain::DailyCompletion;
///
/// let completion = DailyCompletion::from_counts(2, 3);
/// assert_eq!(completion.percent(), 66);
/// assert!(completion.meets_threshold(60));
/// assert!(!DailyCompletion::from_counts(0, 0).meets_threshold(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyCompletion {
    completed: usize,
    total: usize,
    total_focus_seconds: u64,
}

impl DailyCompletion {
    /// Summarises a day's task records.
    #[must_use]
    pub fn from_records(records: &[TaskRecord]) -> Self {
        let completed = records.iter().filter(|record| record.is_completed()).count();
        let total_focus_seconds = records
            .iter()
            .filter_map(TaskRecord::focus_seconds)
            .fold(0_u64, u64::saturating_add);
        Self {
            completed,
            total: records.len(),
            total_focus_seconds,
        }
    }

    /// Builds completion figures from raw counts.
    ///
    /// `completed` is capped at `total`.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        Self {
            completed: completed.min(total),
            total,
            total_focus_seconds: 0,
        }
    }

    /// Returns the number of tasks with a positive completion count.
    #[must_use]
    pub const fn completed(self) -> usize {
        self.completed
    }

    /// Returns the number of tasks tracked for the day.
    #[must_use]
    pub const fn total(self) -> usize {
        self.total
    }

    /// Returns the summed focus time of the day's tasks.
    #[must_use]
    pub const fn total_focus_seconds(self) -> u64 {
        self.total_focus_seconds
    }

    /// Returns the completion percentage rounded down; zero for an empty day.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.completed
            .saturating_mul(100)
            .checked_div(self.total)
            .and_then(|value| u8::try_from(value).ok())
            .unwrap_or(0)
    }

    /// Returns `true` when the completion percentage is at least
    /// `threshold_percent`.
    ///
    /// The comparison is exact, so 59.999% never meets a 60% threshold.
    #[must_use]
    pub fn meets_threshold(self, threshold_percent: u8) -> bool {
        if self.total == 0 {
            return threshold_percent == 0;
        }
        let completed = self.completed as u128;
        let total = self.total as u128;
        completed * 100 >= u128::from(threshold_percent) * total
    }
}
