//! Catalog item handlers.
//!
//! ```text
//! GET    /items        list all items (public)
//! POST   /items        create an item (Basic Auth)
//! GET    /items/{id}   fetch one item (public)
//! PUT    /items/{id}   partial update (Basic Auth)
//! DELETE /items/{id}   remove an item (Basic Auth)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Serialize;
use tracing::error;

use crate::domain::item::{Item, ItemDraft, ItemId, ItemPatch, NewItem};
use crate::domain::ports::RepositoryError;

use super::auth::{BasicCredentials, authenticate};
use super::error::{ApiError, ApiResult};
use super::state::HttpState;

const ITEM_CREATED: &str = "Товар створено";
const ITEM_UPDATED: &str = "Товар оновлено";
const ITEM_DELETED: &str = "Товар видалено";
const ITEM_NOT_FOUND: &str = "Товар не знайдено";

/// Wire representation of an item.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub size: String,
    pub weight: f64,
    pub color: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            size: item.size,
            weight: item.weight,
            color: item.color,
        }
    }
}

/// Body for a successful create: confirmation plus the assigned id.
#[derive(Debug, Serialize)]
pub struct ItemCreatedResponse {
    message: &'static str,
    id: ItemId,
}

/// Confirmation-only body for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

/// Map item store failures onto wire errors.
fn map_repository_error(error: RepositoryError) -> ApiError {
    match error {
        RepositoryError::NotFound => ApiError::not_found(ITEM_NOT_FOUND),
        other => {
            error!(error = %other, "item store operation failed");
            ApiError::internal("item store operation failed")
        }
    }
}

/// List every item. Public read.
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let items = state.items.list().await.map_err(map_repository_error)?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Create an item from a complete payload.
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    credentials: BasicCredentials,
    payload: web::Json<ItemDraft>,
) -> ApiResult<HttpResponse> {
    authenticate(state.users.as_ref(), &credentials).await?;
    let new_item = NewItem::try_from(payload.into_inner())
        .map_err(|err| ApiError::invalid_request(err.to_string()))?;
    let item = state
        .items
        .insert(new_item)
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Created().json(ItemCreatedResponse {
        message: ITEM_CREATED,
        id: item.id,
    }))
}

/// Fetch a single item by id. Public read.
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<ItemId>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = path.into_inner();
    let item = state
        .items
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;
    Ok(web::Json(item.into()))
}

/// Overwrite the fields present in the payload; absent fields keep their
/// stored values.
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    credentials: BasicCredentials,
    path: web::Path<ItemId>,
    payload: web::Json<ItemPatch>,
) -> ApiResult<web::Json<MessageResponse>> {
    authenticate(state.users.as_ref(), &credentials).await?;
    state
        .items
        .update(path.into_inner(), payload.into_inner())
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(MessageResponse {
        message: ITEM_UPDATED,
    }))
}

/// Delete an item by id.
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    credentials: BasicCredentials,
    path: web::Path<ItemId>,
) -> ApiResult<web::Json<MessageResponse>> {
    authenticate(state.users.as_ref(), &credentials).await?;
    state
        .items
        .delete(path.into_inner())
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(MessageResponse {
        message: ITEM_DELETED,
    }))
}
