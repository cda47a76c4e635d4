use axum::{extract::State, Json};
use tracing::warn;

use crate::pseo::audit::{self, AuditReport};
use crate::AppState;

/// GET /api/audit-pseo
///
/// Resolves every path the sitemap lists. Always 200; read `ok`.
pub async fn audit_pseo(State(state): State<AppState>) -> Json<AuditReport> {
    let report = audit::audit(&state.catalog);
    if !report.ok {
        warn!(missing = report.missing, total = report.total, "pSEO audit found unresolved paths");
    }
    Json(report)
}
