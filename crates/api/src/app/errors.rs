use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use messhall_core::DomainError;
use messhall_infra::StoreError;

/// Message returned for any unknown item id.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Error returned by handlers; rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not JSON, or missing/mistyped fields.
    #[error("{0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Validation(String),

    #[error("{}", ITEM_NOT_FOUND)]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    /// Detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "request failed"),
            other => tracing::debug!(error = %other, "request rejected"),
        }
        json_error(self.status(), self.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
            e @ DomainError::InsufficientStock { .. } => ApiError::Conflict(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Domain(e) => e.into(),
            e @ (StoreError::Database(_) | StoreError::Unavailable(_)) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use messhall_core::ItemId;

    use super::*;

    #[test]
    fn store_not_found_maps_to_404_with_fixed_message() {
        let err = ApiError::from(StoreError::NotFound(ItemId::new(3)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), ITEM_NOT_FOUND);
    }

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let err = ApiError::from(StoreError::Domain(DomainError::validation("unit cannot be empty")));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "unit cannot be empty");

        let err = ApiError::from(DomainError::insufficient(1.0, 2.0));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_errors_hide_detail() {
        let err = ApiError::from(StoreError::Unavailable("lock poisoned".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
