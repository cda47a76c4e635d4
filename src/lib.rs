//! Programmatic-SEO landing pages for Silho AI: a fixed content matrix
//! materialised once at startup, resolved per request, optionally overlaid
//! with curated overrides, and served as JSON.

use axum::Router;
use pseo::sitemap::ChangeFrequency;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod model;
pub mod overrides;
pub mod pseo;
pub mod seo;

use overrides::OverrideSource;
use pseo::Catalog;

/// Shared by every HTTP handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub overrides: Arc<dyn OverrideSource>,
    /// Public origin without a trailing slash.
    pub base_url: String,
    pub sitemap_frequency: ChangeFrequency,
    pub sitemap_priority: f32,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, overrides: Arc<dyn OverrideSource>, base_url: &str) -> Self {
        let defaults = config::Sitemap::default();
        Self {
            catalog,
            overrides,
            base_url: base_url.trim_end_matches('/').to_string(),
            sitemap_frequency: defaults.change_frequency,
            sitemap_priority: defaults.priority,
        }
    }

    pub fn with_sitemap(mut self, sitemap: &config::Sitemap) -> Self {
        self.sitemap_frequency = sitemap.change_frequency;
        self.sitemap_priority = sitemap.priority;
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::page_routes())
        .merge(api::tooling_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
