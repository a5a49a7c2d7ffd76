//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. They exist solely to satisfy Diesel's type
//! requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::{items, users};

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ItemRow {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub size: String,
    pub weight: f64,
    pub color: String,
}

/// Insertable struct for creating new item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub name: &'a str,
    pub price: f64,
    pub size: &'a str,
    pub weight: f64,
    pub color: &'a str,
}

/// Changeset struct for partial item updates. `None` fields are skipped.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemChangeset {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub color: Option<String>,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
