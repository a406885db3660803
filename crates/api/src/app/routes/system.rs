use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};

use crate::app::services::SharedServices;
use crate::app::stats::MessStats;

const HOME_HTML: &str = "<h2>Welcome to Mess Management API</h2>";
const DASHBOARD_HTML: &str = include_str!("../../../web_ui/dashboard.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn stats(State(services): State<SharedServices>) -> Json<MessStats> {
    Json(services.stats().snapshot())
}
