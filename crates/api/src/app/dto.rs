use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use messhall_core::ItemId;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Deserialize)]
pub struct UseItemRequest {
    pub id: ItemId,
    pub quantity_used: f64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteItemRequest {
    pub id: ItemId,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const ADDED: Self = Self {
        message: "Item added successfully",
    };
    pub const USED: Self = Self {
        message: "Usage updated successfully",
    };
    pub const DELETED: Self = Self {
        message: "Item deleted successfully",
    };
}

// -------------------------
// Extractor
// -------------------------

/// `Json<T>` whose rejections render as `{"error": ...}` with status 400.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
