//! Verdant: a daily task tracker with a growing garden.
//!
//! Users track tasks each day; completing enough of them grows their garden
//! by one block per day, while neglecting it for too long kills it.
//!
//! # Architecture
//!
//! Verdant follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`garden`]: Garden lifecycle engine, storage ports and orchestration

pub mod garden;
