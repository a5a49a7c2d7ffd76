//! SQLite-backed `ItemRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::item::{Item, ItemId, ItemPatch, NewItem};
use crate::domain::ports::{ItemRepository, RepositoryError};

use super::diesel_helpers::{map_diesel_error, run_blocking};
use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::DbPool;
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: ItemRow) -> Item {
    Item {
        id: row.id,
        name: row.name,
        price: row.price,
        size: row.size,
        weight: row.weight,
        color: row.color,
    }
}

fn patch_to_changeset(patch: ItemPatch) -> ItemChangeset {
    ItemChangeset {
        name: patch.name,
        price: patch.price,
        size: patch.size,
        weight: patch.weight,
        color: patch.color,
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        run_blocking(&self.pool, |conn| {
            let rows: Vec<ItemRow> = items::table
                .select(ItemRow::as_select())
                .order(items::id.asc())
                .load(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(row_to_item).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let row: Option<ItemRow> = items::table
                .find(id)
                .select(ItemRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(row_to_item))
        })
        .await
    }

    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let row = NewItemRow {
                name: &item.name,
                price: item.price,
                size: &item.size,
                weight: item.weight,
                color: &item.color,
            };
            diesel::insert_into(items::table)
                .values(&row)
                .returning(ItemRow::as_returning())
                .get_result(conn)
                .map(row_to_item)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, RepositoryError> {
        // Diesel rejects an empty changeset, and the contract treats an
        // all-absent patch as a no-op that must still 404 on unknown ids.
        if patch.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or(RepositoryError::NotFound);
        }

        run_blocking(&self.pool, move |conn| {
            diesel::update(items::table.find(id))
                .set(patch_to_changeset(patch))
                .returning(ItemRow::as_returning())
                .get_result(conn)
                .optional()
                .map_err(map_diesel_error)?
                .map(row_to_item)
                .ok_or(RepositoryError::NotFound)
        })
        .await
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let affected = diesel::delete(items::table.find(id))
                .execute(conn)
                .map_err(map_diesel_error)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
        .await
    }
}
