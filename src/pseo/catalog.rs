//! The eagerly built, read-only page catalog.

use crate::model::{PseoLandingOverride, RepurposePage, RepurposeTier, Tier3Page, Tier4Page};
use crate::pseo::axes::{PERSONAS, SOURCES, TARGETS, USE_CASES};
use crate::pseo::builder;
use crate::pseo::copy::outcome::CURATED_OUTCOMES;
use crate::pseo::slug::{RepurposeKey, Tier3Key};
use std::collections::HashMap;

pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Every materialised page, in axis declaration order. Built once at startup
/// and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    repurpose: Vec<RepurposePage>,
    tier1_len: usize,
    tier3: Vec<Tier3Page>,
    tier4: Vec<Tier4Page>,
    repurpose_index: HashMap<String, usize>,
    tier4_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn build() -> Self {
        let mut repurpose = Vec::with_capacity(SOURCES.len() * TARGETS.len() * (1 + PERSONAS.len()));
        for source in SOURCES.iter() {
            for target in TARGETS.iter() {
                if source.slug == target.slug {
                    continue;
                }
                repurpose.push(builder::repurpose_page(&RepurposeKey::new(*source, *target, None)));
            }
        }
        let tier1_len = repurpose.len();
        for source in SOURCES.iter() {
            for target in TARGETS.iter() {
                if source.slug == target.slug {
                    continue;
                }
                for persona in PERSONAS.iter() {
                    repurpose.push(builder::repurpose_page(&RepurposeKey::new(
                        *source,
                        *target,
                        Some(*persona),
                    )));
                }
            }
        }

        let mut tier3 = Vec::with_capacity(PERSONAS.len() * USE_CASES.len());
        for persona in PERSONAS.iter() {
            for use_case in USE_CASES.iter() {
                tier3.push(builder::tier3_page(&Tier3Key {
                    persona: *persona,
                    use_case: *use_case,
                }));
            }
        }

        let tier4: Vec<Tier4Page> = CURATED_OUTCOMES
            .iter()
            .map(builder::curated_outcome_page)
            .collect();

        let repurpose_index = repurpose
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();
        let tier4_index = tier4
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();

        Self {
            repurpose,
            tier1_len,
            tier3,
            tier4,
            repurpose_index,
            tier4_index,
        }
    }

    /// Tier 1 followed by Tier 2.
    pub fn repurpose_pages(&self) -> &[RepurposePage] {
        &self.repurpose
    }

    pub fn tier1_pages(&self) -> &[RepurposePage] {
        &self.repurpose[..self.tier1_len]
    }

    pub fn tier2_pages(&self) -> &[RepurposePage] {
        &self.repurpose[self.tier1_len..]
    }

    pub fn tier3_pages(&self) -> &[Tier3Page] {
        &self.tier3
    }

    pub fn tier4_pages(&self) -> &[Tier4Page] {
        &self.tier4
    }

    pub fn repurpose_slugs(&self) -> impl Iterator<Item = &str> {
        self.repurpose.iter().map(|p| p.slug.as_str())
    }

    pub fn tier1_slugs(&self) -> impl Iterator<Item = &str> {
        self.tier1_pages().iter().map(|p| p.slug.as_str())
    }

    pub fn tier3_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tier3
            .iter()
            .map(|p| (p.persona.as_str(), p.use_case.as_str()))
    }

    pub fn tier4_slugs(&self) -> impl Iterator<Item = &str> {
        self.tier4.iter().map(|p| p.slug.as_str())
    }

    pub fn repurpose_page(&self, slug: &str) -> Option<&RepurposePage> {
        self.repurpose_index.get(slug).map(|&i| &self.repurpose[i])
    }

    pub fn tier3_page(&self, persona: &str, use_case: &str) -> Option<&Tier3Page> {
        self.tier3
            .iter()
            .find(|p| p.persona == persona && p.use_case == use_case)
    }

    pub fn tier4_page(&self, slug: &str) -> Option<&Tier4Page> {
        self.tier4_index.get(slug).map(|&i| &self.tier4[i])
    }

    /// Catalog pages sharing a source or a target with `page`, excluding the
    /// page itself.
    pub fn related_repurpose_slugs(&self, page: &RepurposePage, limit: usize) -> Vec<String> {
        self.repurpose
            .iter()
            .filter(|p| p.slug != page.slug && (p.source == page.source || p.target == page.target))
            .take(limit)
            .map(|p| p.slug.clone())
            .collect()
    }

    pub fn repurpose_slugs_for_persona(&self, persona: &str, limit: usize) -> Vec<String> {
        self.tier2_pages()
            .iter()
            .filter(|p| p.persona.as_deref() == Some(persona))
            .take(limit)
            .map(|p| p.slug.clone())
            .collect()
    }

    /// Tier 1+2, then Tier 3, then curated Tier 4 paths.
    pub fn all_paths(&self) -> Vec<String> {
        let repurpose = self.repurpose_slugs().map(|s| format!("/repurpose/{s}"));
        let tier3 = self.tier3.iter().map(Tier3Page::path);
        let tier4 = self.tier4_slugs().map(|s| format!("/turn/{s}"));
        repurpose.chain(tier3).chain(tier4).collect()
    }

    /// Number of indexable landing pages, equal to `all_paths().len()`.
    pub fn page_count(&self) -> usize {
        self.repurpose.len() + self.tier3.len() + self.tier4.len()
    }

    pub fn count_tier(&self, tier: RepurposeTier) -> usize {
        self.repurpose.iter().filter(|p| p.tier == tier).count()
    }

    /// Generated copy of every Tier 1/2 page in override-row shape.
    pub fn export_rows(&self) -> Vec<PseoLandingOverride> {
        self.repurpose.iter().map(PseoLandingOverride::from_page).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialises_every_tier() {
        let catalog = Catalog::build();
        assert_eq!(catalog.tier1_pages().len(), 108);
        assert_eq!(catalog.tier2_pages().len(), 648);
        assert_eq!(catalog.tier3_pages().len(), 54);
        assert_eq!(catalog.tier4_pages().len(), 10);
        assert_eq!(catalog.count_tier(RepurposeTier::SourceToTarget), 108);
        assert_eq!(catalog.all_paths().len(), 108 + 648 + 54 + 10);
        assert_eq!(catalog.page_count(), catalog.all_paths().len());
    }

    #[test]
    fn order_follows_axis_declaration() {
        let catalog = Catalog::build();
        let first: Vec<_> = catalog.tier1_slugs().take(2).collect();
        assert_eq!(first, ["repurpose-blog-post-to-twitter", "repurpose-blog-post-to-linkedin"]);
        assert_eq!(
            catalog.tier2_pages()[0].slug,
            "repurpose-blog-post-to-twitter-for-founders"
        );
        assert_eq!(
            catalog.tier3_keys().next(),
            Some(("founders", "build-in-public"))
        );
        assert_eq!(catalog.all_paths()[0], "/repurpose/repurpose-blog-post-to-twitter");
    }

    #[test]
    fn exact_lookups() {
        let catalog = Catalog::build();
        assert!(catalog.repurpose_page("repurpose-podcast-to-reddit").is_some());
        assert!(catalog.repurpose_page("repurpose-podcast-to-fax").is_none());
        assert!(catalog.tier3_page("marketers", "seo").is_some());
        assert!(catalog.tier4_page("one-tweet-into-5-linkedin-posts").is_some());
        assert!(catalog.tier4_page("tweet-into-5-linkedin-posts").is_none());
    }

    #[test]
    fn related_pages_share_source_or_target() {
        let catalog = Catalog::build();
        let page = catalog.repurpose_page("repurpose-podcast-to-reddit").unwrap();
        let related = catalog.related_repurpose_slugs(page, DEFAULT_RELATED_LIMIT);
        assert_eq!(related.len(), 4);
        for slug in &related {
            assert_ne!(slug, &page.slug);
            let other = catalog.repurpose_page(slug).unwrap();
            assert!(other.source == page.source || other.target == page.target);
        }
        assert_eq!(related[0], "repurpose-blog-post-to-reddit");
    }

    #[test]
    fn export_rows_cover_tier1_and_tier2() {
        let catalog = Catalog::build();
        let rows = catalog.export_rows();
        assert_eq!(rows.len(), 108 + 648);
        assert!(rows.iter().all(PseoLandingOverride::has_content));
        let first = &rows[0];
        assert_eq!(first.slug, "repurpose-blog-post-to-twitter");
        assert_eq!(first.meta_description.as_deref(), Some(catalog.tier1_pages()[0].description.as_str()));
    }

    #[test]
    fn persona_slugs_are_tier2_only() {
        let catalog = Catalog::build();
        let slugs = catalog.repurpose_slugs_for_persona("agencies", 3);
        assert_eq!(slugs.len(), 3);
        assert!(slugs.iter().all(|s| s.ends_with("-for-agencies")));
        assert!(catalog.repurpose_slugs_for_persona("aliens", 3).is_empty());
    }
}
