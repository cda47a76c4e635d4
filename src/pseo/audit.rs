//! Checks that every enumerated pSEO path resolves to real content.

use crate::pseo::catalog::Catalog;
use crate::pseo::resolve::{self, ResolutionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A pSEO URL path split into its family and segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseoPath<'a> {
    Repurpose(&'a str),
    Tier3 { persona: &'a str, use_case: &'a str },
    Outcome(&'a str),
}

impl<'a> PseoPath<'a> {
    pub fn parse(path: &'a str) -> Option<Self> {
        let single = |rest: &'a str| Some(rest).filter(|s| !s.is_empty() && !s.contains('/'));
        if let Some(rest) = path.strip_prefix("/repurpose/") {
            return single(rest).map(PseoPath::Repurpose);
        }
        if let Some(rest) = path.strip_prefix("/turn/") {
            return single(rest).map(PseoPath::Outcome);
        }
        let rest = path.strip_prefix("/content-repurposing/for/")?;
        let (persona, use_case) = rest.split_once('/')?;
        if persona.is_empty() || use_case.is_empty() || use_case.contains('/') {
            return None;
        }
        Some(PseoPath::Tier3 { persona, use_case })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditDetail {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub ok: bool,
    pub total: usize,
    pub resolved: usize,
    pub missing: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<AuditDetail>>,
}

/// Why `path` does not resolve to real content, if it doesn't.
pub fn check_path(catalog: &Catalog, path: &str) -> Option<String> {
    let Some(parsed) = PseoPath::parse(path) else {
        return Some("not a pSEO path".to_string());
    };
    let (kind, h1) = match parsed {
        PseoPath::Repurpose(slug) => {
            let r = resolve::resolve_repurpose(catalog, slug);
            (r.kind(), r.into_page().h1)
        }
        PseoPath::Tier3 { persona, use_case } => {
            let r = resolve::resolve_tier3(catalog, persona, use_case);
            (r.kind(), r.into_page().h1)
        }
        PseoPath::Outcome(slug) => {
            let r = resolve::resolve_outcome(catalog, slug);
            (r.kind(), r.into_page().h1)
        }
    };
    if kind == ResolutionKind::Fallback {
        return Some("resolved to the generic fallback page".to_string());
    }
    if h1.trim().is_empty() {
        return Some("empty h1".to_string());
    }
    None
}

pub fn audit_paths<'a>(catalog: &Catalog, paths: impl IntoIterator<Item = &'a str>) -> AuditReport {
    let mut total = 0;
    let mut details = Vec::new();
    for path in paths {
        total += 1;
        if let Some(reason) = check_path(catalog, path) {
            details.push(AuditDetail {
                path: path.to_string(),
                reason,
            });
        }
    }
    let missing = details.len();
    AuditReport {
        ok: missing == 0,
        total,
        resolved: total - missing,
        missing,
        details: (!details.is_empty()).then_some(details),
    }
}

/// Audit every path the catalog exposes to the sitemap.
pub fn audit(catalog: &Catalog) -> AuditReport {
    let paths = catalog.all_paths();
    audit_paths(catalog, paths.iter().map(String::as_str))
}

/// Values shared by more than one Tier 1/2 slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UniquenessReport {
    pub duplicate_h1: Vec<(String, Vec<String>)>,
    pub duplicate_intro: Vec<(String, Vec<String>)>,
    /// Slugs sharing both h1 and intro. Must always be empty.
    pub duplicate_pairs: Vec<(String, Vec<String>)>,
}

impl UniquenessReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_h1.is_empty() && self.duplicate_intro.is_empty() && self.duplicate_pairs.is_empty()
    }
}

fn duplicates<'a>(items: impl Iterator<Item = (String, &'a str)>) -> Vec<(String, Vec<String>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();
    for (value, slug) in items {
        let slugs = groups.entry(value.clone()).or_insert_with(|| {
            order.push(value);
            Vec::new()
        });
        slugs.push(slug.to_string());
    }
    order
        .into_iter()
        .filter_map(|value| {
            let slugs = groups.remove(&value)?;
            (slugs.len() > 1).then_some((value, slugs))
        })
        .collect()
}

/// Resolve every Tier 1/2 slug and report shared h1 and intro values.
pub fn uniqueness(catalog: &Catalog) -> UniquenessReport {
    let resolved: Vec<(&str, String, String)> = catalog
        .repurpose_slugs()
        .map(|slug| {
            let page = resolve::resolve_repurpose(catalog, slug).into_page();
            (slug, page.h1, page.intro)
        })
        .collect();

    UniquenessReport {
        duplicate_h1: duplicates(resolved.iter().map(|(s, h1, _)| (h1.clone(), *s))),
        duplicate_intro: duplicates(resolved.iter().map(|(s, _, intro)| (intro.clone(), *s))),
        duplicate_pairs: duplicates(
            resolved
                .iter()
                .map(|(s, h1, intro)| (format!("{h1}\n{intro}"), *s)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_paths_by_family() {
        assert_eq!(
            PseoPath::parse("/repurpose/repurpose-tweet-to-reddit"),
            Some(PseoPath::Repurpose("repurpose-tweet-to-reddit"))
        );
        assert_eq!(
            PseoPath::parse("/content-repurposing/for/coaches/seo"),
            Some(PseoPath::Tier3 {
                persona: "coaches",
                use_case: "seo"
            })
        );
        assert_eq!(PseoPath::parse("/turn/x"), Some(PseoPath::Outcome("x")));
        assert_eq!(PseoPath::parse("/turn/"), None);
        assert_eq!(PseoPath::parse("/content-repurposing/for/coaches"), None);
        assert_eq!(PseoPath::parse("/pricing"), None);
    }

    #[test]
    fn full_catalog_has_no_missing_paths() {
        let catalog = Catalog::build();
        let report = audit(&catalog);
        assert!(report.ok, "{:?}", report.details);
        assert_eq!(report.missing, 0);
        assert_eq!(report.total, 820);
        assert_eq!(report.resolved, 820);
        assert!(report.details.is_none());
    }

    #[test]
    fn unresolvable_paths_are_reported() {
        let catalog = Catalog::build();
        let report = audit_paths(
            &catalog,
            ["/repurpose/repurpose-tweet-to-tweet", "/pricing", "/turn/blog-post-into-2-email-posts"],
        );
        assert!(!report.ok);
        assert_eq!(report.total, 3);
        assert_eq!(report.missing, 2);
        let details = report.details.unwrap();
        assert_eq!(details[0].path, "/repurpose/repurpose-tweet-to-tweet");
        assert_eq!(details[1].reason, "not a pSEO path");
    }

    #[test]
    fn report_serializes_without_details_when_clean() {
        let report = AuditReport {
            ok: true,
            total: 1,
            resolved: 1,
            missing: 0,
            details: None,
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v, serde_json::json!({"ok": true, "total": 1, "resolved": 1, "missing": 0}));
    }

    #[test]
    fn duplicates_groups_in_first_seen_order() {
        let items = vec![
            ("a".to_string(), "s1"),
            ("b".to_string(), "s2"),
            ("a".to_string(), "s3"),
        ];
        assert_eq!(
            duplicates(items.into_iter()),
            vec![("a".to_string(), vec!["s1".to_string(), "s3".to_string()])]
        );
    }

    #[test]
    fn tier1_and_tier2_copy_is_unique() {
        let catalog = Catalog::build();
        let report = uniqueness(&catalog);
        assert!(report.is_clean(), "{report:?}");
    }
}
