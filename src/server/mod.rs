//! Startup wiring: migrations, default-admin seeding, and routes.
//!
//! [`bootstrap`] runs once per process before the server accepts
//! connections; [`configure`] registers the HTTP routes on an actix app.

pub mod config;

use std::sync::Arc;

use actix_web::web;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

use crate::api::items::{create_item, delete_item, get_item, list_items, update_item};
use crate::api::state::HttpState;
use crate::domain::password::{PasswordHashError, hash_password};
use crate::domain::ports::{ItemRepository, RepositoryError, UserRepository};
use crate::domain::user::NewUser;
use crate::outbound::persistence::{
    DbPool, DieselItemRepository, DieselUserRepository, PoolConfig, PoolError,
};

use self::config::ServerConfig;

/// Migrations compiled into the binary; applied idempotently at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Username of the account seeded at startup.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Fixed default password for the seeded account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// Failures during the one-time startup sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The connection pool could not be built or checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// Applying the embedded migrations failed.
    #[error("failed to run database migrations: {message}")]
    Migration { message: String },
    /// Seeding the default admin account failed.
    #[error("failed to seed default admin: {0}")]
    Seed(#[from] RepositoryError),
    /// The default admin password could not be hashed.
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),
}

/// Initialise persistence and build the handler state.
///
/// Creates the schema if absent and seeds the default admin account.
pub async fn bootstrap(config: &ServerConfig) -> Result<HttpState, BootstrapError> {
    let pool = DbPool::new(PoolConfig::new(config.database_url()))?;
    run_migrations(pool.clone()).await?;

    let items: Arc<dyn ItemRepository> = Arc::new(DieselItemRepository::new(pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(DieselUserRepository::new(pool));
    seed_default_admin(users.as_ref()).await?;

    Ok(HttpState { items, users })
}

/// Register the catalog routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_items)
        .service(create_item)
        .service(get_item)
        .service(update_item)
        .service(delete_item);
}

async fn run_migrations(pool: DbPool) -> Result<(), BootstrapError> {
    tokio::task::spawn_blocking(move || -> Result<(), BootstrapError> {
        let mut conn = pool.get()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| BootstrapError::Migration {
                message: err.to_string(),
            })?;
        Ok(())
    })
    .await
    .map_err(|err| BootstrapError::Migration {
        message: format!("blocking task failed: {err}"),
    })?
}

async fn seed_default_admin(users: &dyn UserRepository) -> Result<(), BootstrapError> {
    if users
        .find_by_username(DEFAULT_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        info!(
            username = DEFAULT_ADMIN_USERNAME,
            "default admin user already exists"
        );
        return Ok(());
    }

    let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD)?;
    users
        .insert(NewUser {
            username: DEFAULT_ADMIN_USERNAME.to_owned(),
            password_hash,
        })
        .await?;
    info!(
        username = DEFAULT_ADMIN_USERNAME,
        "created default admin user with the default password"
    );
    Ok(())
}
