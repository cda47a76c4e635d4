//! Liveness endpoint, with the size of the materialised catalog.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    /// Indexable pages in the materialised catalog.
    pub pages: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        module: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        pages: state.catalog.page_count(),
    })
}

/// Routes for `/health`.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
