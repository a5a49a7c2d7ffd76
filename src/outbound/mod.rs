//! Outbound adapters for driven infrastructure.

pub mod persistence;
