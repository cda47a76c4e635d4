//! Slug grammars for the three pSEO URL families.
//!
//! ```text
//! repurpose := "repurpose-" source "-to-" target [ "-for-" persona ]
//! outcome   := source "-into-" count "-" target "-posts"      count >= 1
//! tier3     := persona "/" use-case                            (two path segments)
//! ```
//!
//! A slug parses only when every referenced axis value exists and the source
//! and target differ. Anything else is a typed [`SlugError`].

use crate::model::AxisValue;
use crate::pseo::axes;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static REPURPOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^repurpose-(.+)-to-(.+?)(?:-for-(.+))?$").expect("repurpose slug regex")
});
static OUTCOME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)-into-(\d+)-(.+)-posts$").expect("outcome slug regex"));

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug does not match any known grammar")]
    Grammar,
    #[error("unknown source `{0}`")]
    UnknownSource(String),
    #[error("unknown target `{0}`")]
    UnknownTarget(String),
    #[error("unknown persona `{0}`")]
    UnknownPersona(String),
    #[error("unknown use case `{0}`")]
    UnknownUseCase(String),
    #[error("source and target are both `{0}`")]
    SameSourceAndTarget(String),
    #[error("invalid output count `{0}`")]
    InvalidCount(String),
}

/// A parsed `repurpose-*` slug. Tier 1 when `persona` is `None`, Tier 2 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepurposeKey {
    pub source: AxisValue,
    pub target: AxisValue,
    pub persona: Option<AxisValue>,
}

impl RepurposeKey {
    pub fn new(source: AxisValue, target: AxisValue, persona: Option<AxisValue>) -> Self {
        Self {
            source,
            target,
            persona,
        }
    }

    /// Canonical slug for this key.
    pub fn slug(&self) -> String {
        match self.persona {
            Some(persona) => format!(
                "repurpose-{}-to-{}-for-{}",
                self.source.slug, self.target.slug, persona.slug
            ),
            None => format!("repurpose-{}-to-{}", self.source.slug, self.target.slug),
        }
    }

    /// The Tier 1 combination key, e.g. `youtube-video-to-reddit`.
    pub fn combo(&self) -> String {
        format!("{}-to-{}", self.source.slug, self.target.slug)
    }
}

/// A parsed `<source>-into-<N>-<target>-posts` slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutcomeKey {
    pub source: AxisValue,
    pub target: AxisValue,
    pub count: u32,
}

impl OutcomeKey {
    pub fn slug(&self) -> String {
        format!(
            "{}-into-{}-{}-posts",
            self.source.slug, self.count, self.target.slug
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tier3Key {
    pub persona: AxisValue,
    pub use_case: AxisValue,
}

/// Result of classifying an arbitrary slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSlug {
    Repurpose(RepurposeKey),
    Outcome(OutcomeKey),
    Unparseable(SlugError),
}

/// Try the repurpose grammar, then the outcome grammar. The error reported
/// for unparseable input comes from whichever grammar matched structurally.
pub fn classify(slug: &str) -> ParsedSlug {
    match parse_repurpose(slug) {
        Ok(key) => return ParsedSlug::Repurpose(key),
        Err(SlugError::Grammar) => {}
        Err(err) => return ParsedSlug::Unparseable(err),
    }
    match parse_outcome(slug) {
        Ok(key) => ParsedSlug::Outcome(key),
        Err(err) => ParsedSlug::Unparseable(err),
    }
}

fn check_pair(source: &str, target: &str) -> Result<(AxisValue, AxisValue), SlugError> {
    if source == target {
        return Err(SlugError::SameSourceAndTarget(source.to_string()));
    }
    let source_v = axes::source(source).ok_or_else(|| SlugError::UnknownSource(source.to_string()))?;
    let target_v = axes::target(target).ok_or_else(|| SlugError::UnknownTarget(target.to_string()))?;
    Ok((source_v, target_v))
}

pub fn parse_repurpose(slug: &str) -> Result<RepurposeKey, SlugError> {
    let caps = REPURPOSE_RE.captures(slug).ok_or(SlugError::Grammar)?;
    let (source, target) = check_pair(&caps[1], &caps[2])?;
    let persona = match caps.get(3) {
        Some(m) => Some(
            axes::persona(m.as_str())
                .ok_or_else(|| SlugError::UnknownPersona(m.as_str().to_string()))?,
        ),
        None => None,
    };
    Ok(RepurposeKey::new(source, target, persona))
}

pub fn parse_outcome(slug: &str) -> Result<OutcomeKey, SlugError> {
    let caps = OUTCOME_RE.captures(slug).ok_or(SlugError::Grammar)?;
    let raw_count = &caps[2];
    // Counts are canonical: no leading zeros, so one page has one slug.
    let count = Some(raw_count)
        .filter(|raw| !raw.starts_with('0'))
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .ok_or_else(|| SlugError::InvalidCount(raw_count.to_string()))?;
    let (source, target) = check_pair(&caps[1], &caps[3])?;
    Ok(OutcomeKey {
        source,
        target,
        count,
    })
}

pub fn parse_tier3(persona: &str, use_case: &str) -> Result<Tier3Key, SlugError> {
    let persona_v =
        axes::persona(persona).ok_or_else(|| SlugError::UnknownPersona(persona.to_string()))?;
    let use_case_v =
        axes::use_case(use_case).ok_or_else(|| SlugError::UnknownUseCase(use_case.to_string()))?;
    Ok(Tier3Key {
        persona: persona_v,
        use_case: use_case_v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tier1_and_tier2_slugs() {
        let key = parse_repurpose("repurpose-youtube-video-to-youtube-shorts").unwrap();
        assert_eq!(key.source.slug, "youtube-video");
        assert_eq!(key.target.slug, "youtube-shorts");
        assert!(key.persona.is_none());

        let key = parse_repurpose("repurpose-blog-post-to-twitter-for-indie-hackers").unwrap();
        assert_eq!(key.target.slug, "twitter");
        assert_eq!(key.persona.map(|p| p.slug), Some("indie-hackers"));
        assert_eq!(key.slug(), "repurpose-blog-post-to-twitter-for-indie-hackers");
        assert_eq!(key.combo(), "blog-post-to-twitter");
    }

    #[test]
    fn rejects_bad_repurpose_slugs_with_a_reason() {
        assert_eq!(parse_repurpose("blog-post-to-twitter"), Err(SlugError::Grammar));
        assert_eq!(
            parse_repurpose("repurpose-blog-post-to-blog-post"),
            Err(SlugError::SameSourceAndTarget("blog-post".into()))
        );
        assert_eq!(
            parse_repurpose("repurpose-youtube-video-to-youtube_shorts"),
            Err(SlugError::UnknownTarget("youtube_shorts".into()))
        );
        assert_eq!(
            parse_repurpose("repurpose-fax-to-twitter"),
            Err(SlugError::UnknownSource("fax".into()))
        );
        assert_eq!(
            parse_repurpose("repurpose-tweet-to-linkedin-for-aliens"),
            Err(SlugError::UnknownPersona("aliens".into()))
        );
    }

    #[test]
    fn parses_outcome_slugs() {
        let key = parse_outcome("blog-post-into-5-linkedin-posts").unwrap();
        assert_eq!(key.source.slug, "blog-post");
        assert_eq!(key.target.slug, "linkedin");
        assert_eq!(key.count, 5);
        assert_eq!(key.slug(), "blog-post-into-5-linkedin-posts");
    }

    #[test]
    fn outcome_count_must_be_positive_and_fit() {
        assert_eq!(
            parse_outcome("blog-post-into-0-linkedin-posts"),
            Err(SlugError::InvalidCount("0".into()))
        );
        assert_eq!(
            parse_outcome("blog-post-into-05-linkedin-posts"),
            Err(SlugError::InvalidCount("05".into()))
        );
        assert_eq!(
            parse_outcome("blog-post-into-00-linkedin-posts"),
            Err(SlugError::InvalidCount("00".into()))
        );
        assert!(matches!(
            parse_outcome("blog-post-into-99999999999-linkedin-posts"),
            Err(SlugError::InvalidCount(_))
        ));
        assert_eq!(
            parse_outcome("one-tweet-into-5-linkedin-posts"),
            Err(SlugError::UnknownSource("one-tweet".into()))
        );
        assert_eq!(parse_outcome("blog-post-into-5-tiktok-scripts"), Err(SlugError::Grammar));
    }

    #[test]
    fn classify_prefers_the_structurally_matching_grammar() {
        assert!(matches!(classify("repurpose-tweet-to-reddit"), ParsedSlug::Repurpose(_)));
        assert!(matches!(classify("podcast-into-3-threads-posts"), ParsedSlug::Outcome(_)));
        assert_eq!(
            classify("repurpose-tweet-to-tweet"),
            ParsedSlug::Unparseable(SlugError::SameSourceAndTarget("tweet".into()))
        );
        assert_eq!(classify("hello-world"), ParsedSlug::Unparseable(SlugError::Grammar));
    }

    #[test]
    fn tier3_pairs_need_known_axis_values() {
        assert!(parse_tier3("coaches", "seo").is_ok());
        assert_eq!(
            parse_tier3("coaches", "knitting"),
            Err(SlugError::UnknownUseCase("knitting".into()))
        );
    }
}
