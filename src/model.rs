use serde::{Deserialize, Serialize};

/// One entry of a matrix axis. The slug is unique within its axis.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct AxisValue {
    pub slug: &'static str,
    pub label: &'static str,
}

impl AxisValue {
    pub const fn new(slug: &'static str, label: &'static str) -> Self {
        Self { slug, label }
    }

    pub fn label_lower(&self) -> String {
        self.label.to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Which slice of the repurpose matrix a page belongs to. Serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepurposeTier {
    SourceToTarget,
    SourceToTargetForPersona,
}

impl RepurposeTier {
    pub fn as_u8(&self) -> u8 {
        match self {
            RepurposeTier::SourceToTarget => 1,
            RepurposeTier::SourceToTargetForPersona => 2,
        }
    }

    pub fn from_u8(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(RepurposeTier::SourceToTarget),
            2 => Some(RepurposeTier::SourceToTargetForPersona),
            _ => None,
        }
    }
}

impl Serialize for RepurposeTier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for RepurposeTier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        RepurposeTier::from_u8(raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown repurpose tier {raw}")))
    }
}

/// Tier 1 and Tier 2 landing page: `repurpose-<source>-to-<target>[-for-<persona>]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepurposePage {
    pub slug: String,
    pub tier: RepurposeTier,
    pub source: String,
    pub source_label: String,
    pub target: String,
    pub target_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_label: Option<String>,
    pub title: String,
    pub description: String,
    /// Lead paragraph. Never repeats the h1.
    pub intro: String,
    pub h1: String,
    pub why_manual_fails: String,
    pub how_we_solve: String,
    pub example_snippet: String,
    pub best_for: String,
    pub pain_points: Vec<String>,
    pub tips: Vec<String>,
    pub what_you_get: String,
    pub faqs: Vec<Faq>,
}

/// Tier 3 landing page keyed by (persona, use case).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tier3Page {
    pub persona: String,
    pub persona_label: String,
    pub use_case: String,
    pub use_case_label: String,
    pub title: String,
    pub description: String,
    pub h1: String,
    pub body: String,
    pub cta: String,
    pub problem_paragraph: String,
    pub solution_paragraph: String,
    pub how_it_works_paragraph: String,
    pub faqs: Vec<Faq>,
}

impl Tier3Page {
    pub fn path(&self) -> String {
        format!("/content-repurposing/for/{}/{}", self.persona, self.use_case)
    }
}

/// Tier 4 outcome page: `<source>-into-<N>-<target>-posts` plus curated variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tier4Page {
    pub slug: String,
    pub source: String,
    pub source_label: String,
    pub target: String,
    pub target_label: String,
    /// Number of outputs promised by the page (always >= 1).
    pub count: u32,
    pub title: String,
    pub description: String,
    pub h1: String,
    pub body: String,
    pub cta: String,
    pub faqs: Vec<Faq>,
}

/// Curated landing copy for one slug, as stored in the override table or the
/// scraped JSON file. Every content field is optional.
///
/// This is also the row shape produced by the export endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct PseoLandingOverride {
    pub slug: String,
    #[serde(default)]
    pub h1: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub why_manual_fails: Option<String>,
    #[serde(default)]
    pub how_we_solve: Option<String>,
    #[serde(default)]
    pub example_snippet: Option<String>,
    #[serde(default)]
    pub best_for: Option<String>,
}

impl PseoLandingOverride {
    /// Export row for a generated page: every field populated.
    pub fn from_page(page: &RepurposePage) -> Self {
        Self {
            slug: page.slug.clone(),
            h1: Some(page.h1.clone()),
            intro: Some(page.intro.clone()),
            meta_description: Some(page.description.clone()),
            why_manual_fails: Some(page.why_manual_fails.clone()),
            how_we_solve: Some(page.how_we_solve.clone()),
            example_snippet: Some(page.example_snippet.clone()),
            best_for: Some(page.best_for.clone()),
        }
    }

    /// True when at least one content field is set.
    pub fn has_content(&self) -> bool {
        [
            &self.h1,
            &self.intro,
            &self.meta_description,
            &self.why_manual_fails,
            &self.how_we_solve,
            &self.example_snippet,
            &self.best_for,
        ]
        .iter()
        .any(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_serializes_as_number() {
        let v = serde_json::to_value(RepurposeTier::SourceToTargetForPersona).unwrap();
        assert_eq!(v, 2);
        let back: RepurposeTier = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(back, RepurposeTier::SourceToTarget);
        assert!(serde_json::from_value::<RepurposeTier>(serde_json::json!(3)).is_err());
    }

    #[test]
    fn override_row_tolerates_missing_fields() {
        let row: PseoLandingOverride =
            serde_json::from_str(r#"{"slug":"repurpose-pdf-to-reddit","intro":null}"#).unwrap();
        assert_eq!(row.slug, "repurpose-pdf-to-reddit");
        assert!(row.h1.is_none());
        assert!(row.intro.is_none());
        assert!(row.best_for.is_none());
    }
}
