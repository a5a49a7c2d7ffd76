//! Shared plumbing for the Diesel adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::{DbPool, PoolError};

/// Run a synchronous Diesel operation on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(pool: &DbPool, op: F) -> Result<T, RepositoryError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, RepositoryError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(map_pool_error)?;
        op(&mut conn)
    })
    .await
    .map_err(|err| RepositoryError::connection(format!("blocking task failed: {err}")))?
}

/// Map pool errors to domain repository errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    RepositoryError::connection(error.to_string())
}

/// Map Diesel errors to domain repository errors.
///
/// Details are logged at debug level; clients only see the category.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => RepositoryError::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::query("unique constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        _ => RepositoryError::query("database error"),
    }
}
