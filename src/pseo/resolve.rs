//! Slug resolution. Each URL family has an ordered list of strategies; the
//! first one to produce a page wins, and a fallback page closes every chain.

use crate::model::{RepurposePage, Tier3Page, Tier4Page};
use crate::pseo::builder::{self, GENERIC_TIER3_H1};
use crate::pseo::catalog::Catalog;
use crate::pseo::slug;
use serde::Serialize;
use tracing::debug;

/// How a page was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<P> {
    /// Built from a slug that parsed under its grammar.
    Synthesized(P),
    /// Exact entry of the materialised catalog.
    Catalog(P),
    /// Generic page for input that matched nothing.
    Fallback(P),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    Synthesized,
    Catalog,
    Fallback,
}

impl<P> Resolution<P> {
    pub fn page(&self) -> &P {
        match self {
            Resolution::Synthesized(p) | Resolution::Catalog(p) | Resolution::Fallback(p) => p,
        }
    }

    pub fn into_page(self) -> P {
        match self {
            Resolution::Synthesized(p) | Resolution::Catalog(p) | Resolution::Fallback(p) => p,
        }
    }

    pub fn kind(&self) -> ResolutionKind {
        match self {
            Resolution::Synthesized(_) => ResolutionKind::Synthesized,
            Resolution::Catalog(_) => ResolutionKind::Catalog,
            Resolution::Fallback(_) => ResolutionKind::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }

    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> Resolution<Q> {
        match self {
            Resolution::Synthesized(p) => Resolution::Synthesized(f(p)),
            Resolution::Catalog(p) => Resolution::Catalog(f(p)),
            Resolution::Fallback(p) => Resolution::Fallback(f(p)),
        }
    }
}

pub type Strategy<K, P> = fn(&Catalog, &K) -> Option<Resolution<P>>;

/// Run `strategies` in order and return the first page produced.
pub fn first_match<K: ?Sized, P>(
    catalog: &Catalog,
    key: &K,
    strategies: &[Strategy<K, P>],
) -> Option<Resolution<P>> {
    strategies.iter().find_map(|strategy| strategy(catalog, key))
}

// ---- /repurpose/<slug> ----

fn has_content(page: &RepurposePage) -> bool {
    page.h1 != GENERIC_TIER3_H1
}

fn synthesize_repurpose(_: &Catalog, slug: &str) -> Option<Resolution<RepurposePage>> {
    match slug::parse_repurpose(slug) {
        Ok(key) => Some(builder::repurpose_page(&key))
            .filter(has_content)
            .map(Resolution::Synthesized),
        Err(err) => {
            debug!(slug, %err, "repurpose slug did not parse");
            None
        }
    }
}

fn catalog_repurpose(catalog: &Catalog, slug: &str) -> Option<Resolution<RepurposePage>> {
    catalog
        .repurpose_page(slug)
        .filter(|p| has_content(p))
        .cloned()
        .map(Resolution::Catalog)
}

pub static REPURPOSE_STRATEGIES: [Strategy<str, RepurposePage>; 2] =
    [synthesize_repurpose, catalog_repurpose];

/// Resolve a Tier 1/2 slug. Never fails; the returned page never carries the
/// generic Tier 3 h1.
pub fn resolve_repurpose(catalog: &Catalog, slug: &str) -> Resolution<RepurposePage> {
    first_match(catalog, slug, &REPURPOSE_STRATEGIES)
        .unwrap_or_else(|| Resolution::Fallback(builder::repurpose_fallback(slug)))
}

// ---- /content-repurposing/for/<persona>/<use-case> ----

/// Path segments of a Tier 3 URL.
#[derive(Debug, Clone, Copy)]
pub struct Tier3Path<'a> {
    pub persona: &'a str,
    pub use_case: &'a str,
}

fn synthesize_tier3(_: &Catalog, path: &Tier3Path<'_>) -> Option<Resolution<Tier3Page>> {
    slug::parse_tier3(path.persona, path.use_case)
        .ok()
        .map(|key| Resolution::Synthesized(builder::tier3_page(&key)))
}

fn catalog_tier3(catalog: &Catalog, path: &Tier3Path<'_>) -> Option<Resolution<Tier3Page>> {
    catalog
        .tier3_page(path.persona, path.use_case)
        .cloned()
        .map(Resolution::Catalog)
}

pub fn resolve_tier3(catalog: &Catalog, persona: &str, use_case: &str) -> Resolution<Tier3Page> {
    let path = Tier3Path { persona, use_case };
    let strategies: [Strategy<Tier3Path<'_>, Tier3Page>; 2] =
        [synthesize_tier3 as _, catalog_tier3 as _];
    first_match(catalog, &path, &strategies)
        .unwrap_or_else(|| Resolution::Fallback(builder::tier3_fallback(persona, use_case)))
}

// ---- /turn/<slug> ----

fn synthesize_outcome(_: &Catalog, slug: &str) -> Option<Resolution<Tier4Page>> {
    slug::parse_outcome(slug)
        .ok()
        .map(|key| Resolution::Synthesized(builder::outcome_page(&key)))
}

fn catalog_outcome(catalog: &Catalog, slug: &str) -> Option<Resolution<Tier4Page>> {
    catalog.tier4_page(slug).cloned().map(Resolution::Catalog)
}

pub static OUTCOME_STRATEGIES: [Strategy<str, Tier4Page>; 2] =
    [synthesize_outcome, catalog_outcome];

pub fn resolve_outcome(catalog: &Catalog, slug: &str) -> Resolution<Tier4Page> {
    first_match(catalog, slug, &OUTCOME_STRATEGIES)
        .unwrap_or_else(|| Resolution::Fallback(builder::outcome_fallback(slug)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_order_is_parse_then_catalog_then_fallback() {
        let catalog = Catalog::build();
        assert_eq!(
            resolve_repurpose(&catalog, "repurpose-tweet-to-email").kind(),
            ResolutionKind::Synthesized
        );
        assert_eq!(
            resolve_outcome(&catalog, "one-tweet-into-5-linkedin-posts").kind(),
            ResolutionKind::Catalog
        );
        assert_eq!(
            resolve_outcome(&catalog, "blog-post-into-0-linkedin-posts").kind(),
            ResolutionKind::Fallback
        );
        assert!(resolve_tier3(&catalog, "aliens", "seo").is_fallback());
    }

    #[test]
    fn tier3_pairs_synthesize_and_unknown_pairs_fall_back() {
        let catalog = Catalog::build();
        let r = resolve_tier3(&catalog, "coaches", "seo");
        assert_eq!(r.kind(), ResolutionKind::Synthesized);
        assert_eq!(r.page().persona, "coaches");
        assert_eq!(r.page().use_case, "seo");

        let r = resolve_tier3(&catalog, "coaches", "knitting");
        assert_eq!(r.kind(), ResolutionKind::Fallback);
        assert!(!r.page().h1.is_empty());
    }

    #[test]
    fn first_match_returns_none_when_nothing_applies() {
        let catalog = Catalog::build();
        fn never(_: &Catalog, _: &str) -> Option<Resolution<u8>> {
            None
        }
        fn always(_: &Catalog, _: &str) -> Option<Resolution<u8>> {
            Some(Resolution::Catalog(7))
        }
        assert!(first_match::<str, u8>(&catalog, "x", &[never]).is_none());
        let hit = first_match::<str, u8>(&catalog, "x", &[never, always]).unwrap();
        assert_eq!(hit, Resolution::Catalog(7));
    }

    #[test]
    fn resolution_map_keeps_the_kind() {
        let r = Resolution::Fallback(2).map(|n| n * 10);
        assert_eq!(r, Resolution::Fallback(20));
        assert_eq!(r.into_page(), 20);
    }

    #[test]
    fn curated_outcome_copy_survives_parse_first_resolution() {
        let catalog = Catalog::build();
        let r = resolve_outcome(&catalog, "newsletter-into-10-twitter-posts");
        assert_eq!(r.kind(), ResolutionKind::Synthesized);
        assert_eq!(r.page().h1, "Turn your newsletter into 10 Twitter posts");
    }
}
