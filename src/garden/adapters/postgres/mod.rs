//! `PostgreSQL` adapters for garden persistence.

mod models;
mod repository;
mod schema;

pub use repository::{GardenPgPool, PostgresGardenRepository, PostgresTaskRecordRepository};
