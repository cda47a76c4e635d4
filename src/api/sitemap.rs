use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::error;

use crate::pseo::sitemap;
use crate::AppState;

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let entries = sitemap::entries(
        &state.catalog,
        &state.base_url,
        state.sitemap_frequency,
        state.sitemap_priority,
        Utc::now(),
    );
    match sitemap::to_xml(&entries) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(err) => {
            error!(error = %format!("{err:#}"), "failed to render sitemap");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&state.base_url),
    )
}
