//! Application services for garden lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    GardenLifecycleService, GardenReport, GardenServiceError, GardenServiceResult,
};
