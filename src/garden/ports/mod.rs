//! Port contracts for the garden lifecycle.
//!
//! Ports define the row-store operations the lifecycle service consumes.

pub mod repository;

pub use repository::{
    GardenRepository, GardenRepositoryError, GardenRepositoryResult, TaskRecordRepository,
};
