//! Catalog management HTTP API.
//!
//! Stores catalog items in a SQLite file and exposes CRUD operations over
//! HTTP. Mutating routes require HTTP Basic Authentication against the user
//! store; reads are public. A default administrator account is seeded at
//! startup.

pub mod api;
pub mod domain;
pub mod outbound;
pub mod server;
