//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by a
//! SQLite file via Diesel with `r2d2` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Blocking off the runtime**: Diesel's SQLite backend is synchronous,
//!   so every query runs on `tokio::task::spawn_blocking`.
//! - **Strongly typed errors**: database failures are mapped to
//!   [`RepositoryError`](crate::domain::ports::RepositoryError) variants.

mod diesel_helpers;
mod diesel_item_repository;
mod diesel_user_repository;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
