//! Garden lifecycle management for Verdant.
//!
//! A user's garden grows one block per day when enough of that day's tasks
//! are completed, dies after a stretch of inactivity, and is reset by
//! replanting. The module follows hexagonal architecture:
//!
//! - Domain types and the pure lifecycle engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
