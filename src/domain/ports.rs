//! Repository ports implemented by the persistence adapters.
//!
//! Traits expose strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::item::{Item, ItemId, ItemPatch, NewItem};
use super::user::{NewUser, User};

/// Errors surfaced by the persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Database connectivity or pool checkout failures.
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// A query failed inside the database.
    #[error("repository query failed: {message}")]
    Query { message: String },
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
}

impl RepositoryError {
    /// Helper for connection-level adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for catalog items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Return every record in insertion order. No pagination.
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Look up a record by id.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;

    /// Persist a new record; the store assigns the id.
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError>;

    /// Overwrite the fields present in the patch.
    ///
    /// Fails with [`RepositoryError::NotFound`] when the id is absent, even
    /// for an empty patch.
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, RepositoryError>;

    /// Remove a record, failing with [`RepositoryError::NotFound`] when the
    /// id is absent.
    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError>;
}

/// Persistence port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up an account by its unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Persist a new account. Usernames are unique at the store level.
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;
}
