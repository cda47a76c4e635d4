//! Field-by-field merge of curated overrides over generated pages.

use crate::model::{PseoLandingOverride, RepurposePage};
use crate::pseo::builder::GENERIC_TIER3_H1;

/// Scraped headlines that are too generic to replace a generated h1.
pub const GENERIC_SCRAPED_H1: [&str; 4] = [
    "KAPWING",
    "The Best Way to Repurpose Your Content into a Twitter Thread",
    "Home Blog The Best Way to Repurpose Your Content into a Twitter Thread",
    "How to Automate Your Content Repurposing in 5 Steps (From Someone Who Has Done It!)",
];

pub const MIN_INTRO_CHARS: usize = 60;
pub const MAX_INTRO_CHARS: usize = 420;
pub const MIN_DESCRIPTION_CHARS: usize = 40;
pub const MAX_DESCRIPTION_CHARS: usize = 160;

/// True for a denylisted scraped headline or the Tier 3 generic headline.
/// The latter is matched case-insensitively since it would make a resolved
/// page read as not found.
pub fn is_generic_h1(h1: &str) -> bool {
    let h1 = h1.trim();
    h1.eq_ignore_ascii_case(GENERIC_TIER3_H1) || GENERIC_SCRAPED_H1.iter().any(|g| *g == h1)
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn kept(value: &Option<String>) -> Option<String> {
    trimmed(value).map(str::to_string)
}

fn bounded(value: &Option<String>, min: usize, max: usize) -> Option<String> {
    trimmed(value)
        .filter(|s| s.chars().count() > min)
        .map(|s| truncate_chars(s, max))
}

/// The usable part of an override row.
///
/// Fields are trimmed and blanks dropped. A generic h1 is dropped. Intro and
/// meta description must clear a minimum length and are cut to a maximum
/// length. Returns `None` when no field survives.
pub fn sanitize(over: &PseoLandingOverride) -> Option<PseoLandingOverride> {
    let clean = PseoLandingOverride {
        slug: over.slug.clone(),
        h1: trimmed(&over.h1)
            .filter(|h| !is_generic_h1(h))
            .map(str::to_string),
        intro: bounded(&over.intro, MIN_INTRO_CHARS, MAX_INTRO_CHARS),
        meta_description: bounded(&over.meta_description, MIN_DESCRIPTION_CHARS, MAX_DESCRIPTION_CHARS),
        why_manual_fails: kept(&over.why_manual_fails),
        how_we_solve: kept(&over.how_we_solve),
        example_snippet: kept(&over.example_snippet),
        best_for: kept(&over.best_for),
    };
    clean.has_content().then_some(clean)
}

/// Apply the fields of `over` that survive [`sanitize`] to `page`.
pub fn merge_overrides(mut page: RepurposePage, over: Option<&PseoLandingOverride>) -> RepurposePage {
    let Some(over) = over.and_then(sanitize) else {
        return page;
    };

    if let Some(h1) = over.h1 {
        page.h1 = h1;
    }
    if let Some(intro) = over.intro {
        page.intro = intro;
    }
    if let Some(desc) = over.meta_description {
        page.description = desc;
    }
    if let Some(v) = over.why_manual_fails {
        page.why_manual_fails = v;
    }
    if let Some(v) = over.how_we_solve {
        page.how_we_solve = v;
    }
    if let Some(v) = over.example_snippet {
        page.example_snippet = v;
    }
    if let Some(v) = over.best_for {
        page.best_for = v;
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseo::builder;

    fn page_with_h1(h1: &str) -> RepurposePage {
        let mut page = builder::repurpose_fallback("repurpose-anything");
        page.h1 = h1.to_string();
        page
    }

    fn long(prefix: &str, len: usize) -> String {
        let mut s = prefix.to_string();
        while s.chars().count() < len {
            s.push('x');
        }
        s
    }

    #[test]
    fn null_fields_leave_generated_values() {
        let page = page_with_h1("A");
        let intro = long("B", 80);
        let over = PseoLandingOverride {
            slug: page.slug.clone(),
            h1: None,
            intro: Some(intro.clone()),
            ..Default::default()
        };
        let merged = merge_overrides(page.clone(), Some(&over));
        assert_eq!(merged.h1, "A");
        assert_eq!(merged.intro, intro);
        assert_eq!(merged.description, page.description);
        assert_eq!(merged.best_for, page.best_for);
    }

    #[test]
    fn denylisted_h1_is_ignored() {
        for generic in GENERIC_SCRAPED_H1 {
            let over = PseoLandingOverride {
                h1: Some(format!("  {generic} ")),
                ..Default::default()
            };
            let merged = merge_overrides(page_with_h1("A"), Some(&over));
            assert_eq!(merged.h1, "A");
        }
        let over = PseoLandingOverride {
            h1: Some("Podcast to Reddit, done right".into()),
            ..Default::default()
        };
        assert_eq!(
            merge_overrides(page_with_h1("A"), Some(&over)).h1,
            "Podcast to Reddit, done right"
        );
    }

    #[test]
    fn short_intro_and_description_are_junk() {
        let page = page_with_h1("A");
        let over = PseoLandingOverride {
            intro: Some(long("i", MIN_INTRO_CHARS)),
            meta_description: Some(long("d", MIN_DESCRIPTION_CHARS)),
            ..Default::default()
        };
        let merged = merge_overrides(page.clone(), Some(&over));
        assert_eq!(merged.intro, page.intro);
        assert_eq!(merged.description, page.description);
    }

    #[test]
    fn long_intro_and_description_are_truncated() {
        let over = PseoLandingOverride {
            intro: Some(long("i", 1000)),
            meta_description: Some(long("d", 500)),
            why_manual_fails: Some("  because  ".into()),
            ..Default::default()
        };
        let merged = merge_overrides(page_with_h1("A"), Some(&over));
        assert_eq!(merged.intro.chars().count(), MAX_INTRO_CHARS);
        assert_eq!(merged.description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert_eq!(merged.why_manual_fails, "because");
    }

    #[test]
    fn tier3_generic_h1_is_ignored_in_any_case() {
        for h1 in [
            GENERIC_TIER3_H1.to_string(),
            format!("  {} ", GENERIC_TIER3_H1.to_uppercase()),
            GENERIC_TIER3_H1.to_lowercase(),
        ] {
            let over = PseoLandingOverride {
                h1: Some(h1),
                ..Default::default()
            };
            assert_eq!(merge_overrides(page_with_h1("A"), Some(&over)).h1, "A");
        }
    }

    #[test]
    fn sanitize_drops_rows_with_only_unusable_fields() {
        let junk = PseoLandingOverride {
            slug: "repurpose-tweet-to-email".into(),
            h1: Some("KAPWING".into()),
            intro: Some("too short".into()),
            meta_description: Some("   ".into()),
            ..Default::default()
        };
        assert!(sanitize(&junk).is_none());

        let usable = PseoLandingOverride {
            best_for: Some(" Podcasters ".into()),
            ..junk
        };
        let clean = sanitize(&usable).unwrap();
        assert_eq!(clean.slug, "repurpose-tweet-to-email");
        assert_eq!(clean.best_for.as_deref(), Some("Podcasters"));
        assert!(clean.h1.is_none());
        assert!(clean.intro.is_none());
        assert!(clean.meta_description.is_none());
    }

    #[test]
    fn missing_override_returns_page_unchanged() {
        let page = page_with_h1("A");
        assert_eq!(merge_overrides(page.clone(), None), page);
    }
}
