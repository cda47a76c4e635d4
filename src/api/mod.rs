//! HTTP handlers.

pub mod audit;
pub mod export;
pub mod health;
pub mod pages;
pub mod sitemap;

use crate::AppState;
use axum::routing::get;
use axum::Router;

pub use health::health_routes;
pub use pages::page_routes;

/// Audit, export, sitemap and robots.txt.
pub fn tooling_routes() -> Router<AppState> {
    Router::new()
        .route("/api/audit-pseo", get(audit::audit_pseo))
        .route("/api/pseo-export", get(export::pseo_export))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .route("/robots.txt", get(sitemap::robots_txt))
}
