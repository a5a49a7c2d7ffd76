//! SQLite-backed `UserRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User};

use super::diesel_helpers::{map_diesel_error, run_blocking};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id,
        username: row.username,
        password_hash: row.password,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let username = username.to_owned();
        run_blocking(&self.pool, move |conn| {
            let row: Option<UserRow> = users::table
                .filter(users::username.eq(&username))
                .select(UserRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let row = NewUserRow {
                username: &user.username,
                password: &user.password_hash,
            };
            diesel::insert_into(users::table)
                .values(&row)
                .returning(UserRow::as_returning())
                .get_result(conn)
                .map(row_to_user)
                .map_err(map_diesel_error)
        })
        .await
    }
}
