//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store and collaborator wiring, startup seeding
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and the JSON body extractor
//! - `errors.rs`: consistent JSON error responses
//! - `stats.rs`: the dashboard statistics collaborator

use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod stats;

pub use services::{AppServices, SharedServices, build_services};

/// Build the full HTTP router around already-wired services.
pub fn build_app(services: AppServices) -> Router {
    let services: SharedServices = Arc::new(services);

    Router::new()
        .route("/", get(routes::system::home))
        .route("/dashboard", get(routes::system::dashboard))
        .route("/health", get(routes::system::health))
        .route("/stats", get(routes::system::stats))
        .merge(routes::items::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_context))
                .layer(cors()),
        )
        .with_state(services)
}

/// Any origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
