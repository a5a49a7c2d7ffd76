//! Domain types and logic, free of transport and persistence concerns.
//!
//! Inbound adapters map [`DomainError`] into protocol-specific responses;
//! outbound adapters implement the repository traits in [`ports`].

pub mod auth;
pub mod error;
pub mod item;
pub mod password;
pub mod ports;
pub mod user;

pub use self::error::{DomainError, ErrorCode};
pub use self::item::{Item, ItemDraft, ItemId, ItemPatch, MissingFieldsError, NewItem};
pub use self::user::{Credentials, NewUser, User};
