//! The four fixed matrix axes. Declaration order is the iteration order of
//! every catalog built from them.

use crate::model::AxisValue;

pub static SOURCES: [AxisValue; 12] = [
    AxisValue::new("blog-post", "Blog post"),
    AxisValue::new("twitter-thread", "Twitter/X thread"),
    AxisValue::new("tweet", "Single tweet"),
    AxisValue::new("youtube-video", "YouTube video"),
    AxisValue::new("podcast", "Podcast episode"),
    AxisValue::new("newsletter", "Newsletter"),
    AxisValue::new("changelog", "Changelog"),
    AxisValue::new("case-study", "Case study"),
    AxisValue::new("webinar", "Webinar"),
    AxisValue::new("loom", "Loom / screen recording"),
    AxisValue::new("notion", "Notion / internal doc"),
    AxisValue::new("pdf", "PDF / whitepaper"),
];

pub static TARGETS: [AxisValue; 9] = [
    AxisValue::new("twitter", "Twitter/X"),
    AxisValue::new("linkedin", "LinkedIn"),
    AxisValue::new("reddit", "Reddit"),
    AxisValue::new("email", "Email newsletter"),
    AxisValue::new("youtube-shorts", "YouTube Shorts"),
    AxisValue::new("blog", "Blog"),
    AxisValue::new("tiktok", "TikTok"),
    AxisValue::new("instagram", "Instagram"),
    AxisValue::new("threads", "Threads"),
];

pub static PERSONAS: [AxisValue; 6] = [
    AxisValue::new("founders", "Founders"),
    AxisValue::new("indie-hackers", "Indie hackers"),
    AxisValue::new("content-creators", "Content creators"),
    AxisValue::new("marketers", "Marketers"),
    AxisValue::new("coaches", "Coaches & consultants"),
    AxisValue::new("agencies", "Agencies & freelancers"),
];

pub static USE_CASES: [AxisValue; 9] = [
    AxisValue::new("build-in-public", "Build in public"),
    AxisValue::new("product-launch", "Product launch"),
    AxisValue::new("content-batching", "Content batching"),
    AxisValue::new("personal-brand", "Personal brand"),
    AxisValue::new("distribution", "Distribution scaling"),
    AxisValue::new("newsletter-growth", "Newsletter growth"),
    AxisValue::new("seo", "SEO & organic"),
    AxisValue::new("community", "Community & engagement"),
    AxisValue::new("webinar-repurpose", "Webinar repurpose"),
];

/// Source used when a lookup table has no entry for the requested source.
pub const DEFAULT_SOURCE: AxisValue = AxisValue::new("blog-post", "Blog post");
/// Target used when a lookup table has no entry for the requested target.
pub const DEFAULT_TARGET: AxisValue = AxisValue::new("twitter", "Twitter/X");

fn find(axis: &[AxisValue], slug: &str) -> Option<AxisValue> {
    axis.iter().copied().find(|v| v.slug == slug)
}

pub fn source(slug: &str) -> Option<AxisValue> {
    find(&SOURCES, slug)
}

pub fn target(slug: &str) -> Option<AxisValue> {
    find(&TARGETS, slug)
}

pub fn persona(slug: &str) -> Option<AxisValue> {
    find(&PERSONAS, slug)
}

pub fn use_case(slug: &str) -> Option<AxisValue> {
    find(&USE_CASES, slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_within_each_axis() {
        for axis in [&SOURCES[..], &TARGETS[..], &PERSONAS[..], &USE_CASES[..]] {
            let slugs: HashSet<_> = axis.iter().map(|v| v.slug).collect();
            assert_eq!(slugs.len(), axis.len());
        }
    }

    #[test]
    fn lookups_hit_and_miss() {
        assert_eq!(source("podcast").map(|v| v.label), Some("Podcast episode"));
        assert_eq!(target("youtube-shorts").map(|v| v.label), Some("YouTube Shorts"));
        assert!(source("twitter").is_none());
        assert!(target("blog-post").is_none());
        assert!(persona("aliens").is_none());
        assert_eq!(use_case("seo").map(|v| v.label), Some("SEO & organic"));
    }

    #[test]
    fn defaults_are_catalog_members() {
        assert_eq!(source(DEFAULT_SOURCE.slug), Some(DEFAULT_SOURCE));
        assert_eq!(target(DEFAULT_TARGET.slug), Some(DEFAULT_TARGET));
    }
}
