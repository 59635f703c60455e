//! In-memory adapters for garden lifecycle tests and embedding.

mod garden;
mod task_record;

pub use garden::InMemoryGardenRepository;
pub use task_record::InMemoryTaskRecordRepository;

use crate::garden::ports::GardenRepositoryError;

/// Maps a poisoned lock into a persistence failure.
fn poisoned(err: &impl ToString) -> GardenRepositoryError {
    GardenRepositoryError::persistence(std::io::Error::other(err.to_string()))
}
