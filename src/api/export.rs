use axum::{extract::State, Json};

use crate::model::PseoLandingOverride;
use crate::AppState;

/// GET /api/pseo-export
///
/// Generated copy for every Tier 1/2 page, shaped like a
/// `pseo_landing_content` row. Feed it to `pseo_seed` to populate overrides.
pub async fn pseo_export(State(state): State<AppState>) -> Json<Vec<PseoLandingOverride>> {
    Json(state.catalog.export_rows())
}
