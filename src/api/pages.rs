//! The three pSEO page families, served as JSON documents.
//!
//! Every path in these families answers 200. Pages that resolved to the
//! generic fallback carry `X-Robots-Tag: noindex, follow` and a noindex
//! robots entry in their metadata.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::model::{Faq, RepurposePage, Tier3Page, Tier4Page};
use crate::overrides;
use crate::pseo::catalog::DEFAULT_RELATED_LIMIT;
use crate::pseo::merge::merge_overrides;
use crate::pseo::resolve::{self, Resolution, ResolutionKind};
use crate::seo::{self, MetaInput, PageMeta, EEAT_BLURB};
use crate::AppState;

const LEGACY_TIER3_PREFIX: &str = "/content-repurposing-for-";
const X_ROBOTS_TAG: &str = "x-robots-tag";

/// Body shared by every page family.
#[derive(Debug, Serialize)]
pub struct PageResponse<P> {
    pub resolution: ResolutionKind,
    pub page: P,
    /// Paths of related landing pages.
    pub related: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier1_path: Option<String>,
    pub meta: PageMeta,
    pub json_ld: Vec<Value>,
    pub eeat: &'static str,
}

struct Document<'a> {
    path: &'a str,
    title: &'a str,
    description: &'a str,
    h1: &'a str,
    body: &'a str,
    faqs: &'a [Faq],
}

fn describe(state: &AppState, doc: &Document<'_>, no_index: bool) -> (PageMeta, Vec<Value>) {
    let meta = seo::build_metadata(
        &state.base_url,
        &MetaInput {
            title: doc.title,
            description: Some(doc.description),
            path: Some(doc.path),
            no_index,
            ..Default::default()
        },
    );
    let json_ld = vec![
        seo::web_page_schema(&state.base_url, doc.path, doc.title, doc.description, doc.h1, doc.body),
        seo::faq_schema(doc.faqs),
    ];
    (meta, json_ld)
}

fn respond<P: Serialize>(body: PageResponse<P>) -> Response {
    let fallback = body.resolution == ResolutionKind::Fallback;
    let mut res = Json(body).into_response();
    if fallback {
        res.headers_mut().insert(
            HeaderName::from_static(X_ROBOTS_TAG),
            HeaderValue::from_static("noindex, follow"),
        );
    }
    res
}

fn repurpose_paths(slugs: Vec<String>) -> Vec<String> {
    slugs.into_iter().map(|s| format!("/repurpose/{s}")).collect()
}

/// GET /repurpose/:slug
pub async fn repurpose(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let resolution = resolve::resolve_repurpose(&state.catalog, &slug);
    let kind = resolution.kind();
    debug!(%slug, ?kind, "resolved repurpose page");

    let page: RepurposePage = match resolution {
        Resolution::Fallback(page) => page,
        found => {
            let row = overrides::fetch_or_none(state.overrides.as_ref(), &slug).await;
            merge_overrides(found.into_page(), row.as_ref())
        }
    };

    let path = format!("/repurpose/{slug}");
    let (meta, json_ld) = describe(
        &state,
        &Document {
            path: &path,
            title: &page.title,
            description: &page.description,
            h1: &page.h1,
            body: &page.intro,
            faqs: &page.faqs,
        },
        kind == ResolutionKind::Fallback,
    );
    let related = repurpose_paths(state.catalog.related_repurpose_slugs(&page, DEFAULT_RELATED_LIMIT));

    respond(PageResponse {
        resolution: kind,
        page,
        related,
        tier1_path: None,
        meta,
        json_ld,
        eeat: EEAT_BLURB,
    })
}

/// GET /content-repurposing/for/:persona/:use_case
pub async fn tier3(
    State(state): State<AppState>,
    Path((persona, use_case)): Path<(String, String)>,
) -> Response {
    let resolution = resolve::resolve_tier3(&state.catalog, &persona, &use_case);
    let kind = resolution.kind();
    debug!(%persona, %use_case, ?kind, "resolved tier 3 page");
    let page: Tier3Page = resolution.into_page();

    let path = page.path();
    let (meta, json_ld) = describe(
        &state,
        &Document {
            path: &path,
            title: &page.title,
            description: &page.description,
            h1: &page.h1,
            body: &page.body,
            faqs: &page.faqs,
        },
        kind == ResolutionKind::Fallback,
    );
    let related = repurpose_paths(
        state
            .catalog
            .repurpose_slugs_for_persona(&page.persona, DEFAULT_RELATED_LIMIT),
    );

    respond(PageResponse {
        resolution: kind,
        page,
        related,
        tier1_path: None,
        meta,
        json_ld,
        eeat: EEAT_BLURB,
    })
}

/// GET /turn/:slug
pub async fn outcome(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let resolution = resolve::resolve_outcome(&state.catalog, &slug);
    let kind = resolution.kind();
    debug!(%slug, ?kind, "resolved outcome page");
    let page: Tier4Page = resolution.into_page();

    let path = format!("/turn/{slug}");
    let (meta, json_ld) = describe(
        &state,
        &Document {
            path: &path,
            title: &page.title,
            description: &page.description,
            h1: &page.h1,
            body: &page.body,
            faqs: &page.faqs,
        },
        kind == ResolutionKind::Fallback,
    );
    let tier1_path = state
        .catalog
        .repurpose_page(&format!("repurpose-{}-to-{}", page.source, page.target))
        .map(|p| format!("/repurpose/{}", p.slug));

    respond(PageResponse {
        resolution: kind,
        page,
        related: Vec::new(),
        tier1_path,
        meta,
        json_ld,
        eeat: EEAT_BLURB,
    })
}

/// Old Tier 3 URLs (`/content-repurposing-for-<persona>/<use-case>`) are
/// permanently redirected. Anything else is a plain 404.
pub async fn legacy_or_not_found(uri: Uri) -> Response {
    let legacy = uri
        .path()
        .strip_prefix(LEGACY_TIER3_PREFIX)
        .and_then(|rest| rest.split_once('/'))
        .filter(|(persona, use_case)| {
            !persona.is_empty() && !use_case.is_empty() && !use_case.contains('/')
        });
    match legacy {
        Some((persona, use_case)) => {
            let location = format!("/content-repurposing/for/{persona}/{use_case}");
            match HeaderValue::from_str(&location) {
                Ok(value) => (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, value)]).into_response(),
                Err(_) => StatusCode::NOT_FOUND.into_response(),
            }
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/repurpose/:slug", get(repurpose))
        .route("/content-repurposing/for/:persona/:use_case", get(tier3))
        .route("/turn/:slug", get(outcome))
        .fallback(legacy_or_not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn legacy_tier3_urls_redirect_permanently() {
        let res = legacy_or_not_found(Uri::from_static("/content-repurposing-for-founders/seo")).await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "/content-repurposing/for/founders/seo"
        );
    }

    #[tokio::test]
    async fn other_unknown_paths_are_not_found() {
        for uri in ["/nope", "/content-repurposing-for-founders", "/content-repurposing-for-/seo"] {
            let res = legacy_or_not_found(Uri::from_static(uri)).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }
}
