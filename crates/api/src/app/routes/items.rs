use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};

use messhall_inventory::{Item, NewItem, UseItem};

use crate::app::dto::{AddItemRequest, ApiJson, DeleteItemRequest, MessageResponse, UseItemRequest};
use crate::app::errors::ApiError;
use crate::app::services::SharedServices;

pub fn router() -> Router<SharedServices> {
    Router::new()
        .route("/items", get(list_items))
        .route("/add_item", post(add_item))
        .route("/use_item", post(use_item))
        .route("/delete_item", delete(delete_item))
}

pub async fn list_items(State(services): State<SharedServices>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = services.store().list().await?;
    Ok(Json(items))
}

pub async fn add_item(
    State(services): State<SharedServices>,
    ApiJson(body): ApiJson<AddItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let new_item = NewItem::new(body.name, body.quantity, body.unit)?;
    services.store().add(new_item).await?;
    Ok(Json(MessageResponse::ADDED))
}

pub async fn use_item(
    State(services): State<SharedServices>,
    ApiJson(body): ApiJson<UseItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = UseItem::new(body.id, body.quantity_used)?;
    services.store().use_item(cmd).await?;
    Ok(Json(MessageResponse::USED))
}

pub async fn delete_item(
    State(services): State<SharedServices>,
    ApiJson(body): ApiJson<DeleteItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    services.store().delete(body.id).await?;
    Ok(Json(MessageResponse::DELETED))
}
