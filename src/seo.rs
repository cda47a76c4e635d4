//! Page metadata and schema.org structured data.

use crate::model::Faq;
use serde::Serialize;
use serde_json::{json, Value};

pub const SITE_NAME: &str = "Silho AI";
pub const DEFAULT_DESCRIPTION: &str =
    "Turn one founder update into a week of distribution. Platform-native repurposing with Voice Lock.";
pub const EEAT_BLURB: &str = "Silho AI is built by founders who ship weekly. We built it because we were repurposing by hand and wanted one place to turn one piece into platform-native content—without losing our voice. This guide reflects what we've learned helping solo founders and indie hackers scale distribution.";

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

#[derive(Debug, Clone, Default)]
pub struct MetaInput<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    /// Path of the page being rendered.
    pub path: Option<&'a str>,
    /// Canonical path when it differs from `path`.
    pub canonical_path: Option<&'a str>,
    pub no_index: bool,
    pub image: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Build page metadata. `base_url` must not end with a slash.
pub fn build_metadata(base_url: &str, input: &MetaInput<'_>) -> PageMeta {
    let description = input.description.unwrap_or(DEFAULT_DESCRIPTION).to_string();
    let url = format!("{base_url}{}", with_leading_slash(input.path.unwrap_or("")));
    let canonical = input.path.filter(|p| !p.is_empty()).map(|_| match input.canonical_path {
        Some(c) => format!("{base_url}{}", with_leading_slash(c)),
        None => url.clone(),
    });
    let title = if input.title.contains(SITE_NAME) {
        input.title.to_string()
    } else {
        format!("{} | {SITE_NAME}", input.title)
    };
    let image = input.image.map(|i| {
        if i.starts_with("http") {
            i.to_string()
        } else {
            format!("{base_url}{i}")
        }
    });

    PageMeta {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url,
            site_name: SITE_NAME,
            kind: "website",
            images: image
                .iter()
                .map(|url| OgImage {
                    url: url.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: input.title.to_string(),
                })
                .collect(),
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: title.clone(),
            description: description.clone(),
            images: image.into_iter().collect(),
        },
        robots: input.no_index.then_some(Robots {
            index: false,
            follow: true,
        }),
        title,
        description,
        canonical,
    }
}

/// `WebPage` with an `Article` main entity.
pub fn web_page_schema(
    base_url: &str,
    path: &str,
    name: &str,
    description: &str,
    headline: &str,
    body: &str,
) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": name,
        "description": description,
        "url": format!("{base_url}{}", with_leading_slash(path)),
        "publisher": { "@type": "Organization", "name": SITE_NAME, "url": base_url },
        "mainEntity": {
            "@type": "Article",
            "headline": headline,
            "description": description,
            "articleBody": body,
        },
    })
}

pub fn faq_schema(faqs: &[Faq]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://silho.ai";

    #[test]
    fn title_gets_site_suffix_once() {
        let meta = build_metadata(BASE, &MetaInput { title: "Pricing", ..Default::default() });
        assert_eq!(meta.title, "Pricing | Silho AI");
        let meta = build_metadata(
            BASE,
            &MetaInput { title: "Tweet to Reddit | Silho AI", ..Default::default() },
        );
        assert_eq!(meta.title, "Tweet to Reddit | Silho AI");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert!(meta.canonical.is_none());
        assert!(meta.robots.is_none());
    }

    #[test]
    fn canonical_and_noindex() {
        let meta = build_metadata(
            BASE,
            &MetaInput {
                title: "x",
                path: Some("repurpose/a"),
                canonical_path: Some("/repurpose/b"),
                no_index: true,
                image: Some("/og.png"),
                ..Default::default()
            },
        );
        assert_eq!(meta.open_graph.url, "https://silho.ai/repurpose/a");
        assert_eq!(meta.canonical.as_deref(), Some("https://silho.ai/repurpose/b"));
        assert_eq!(meta.robots, Some(Robots { index: false, follow: true }));
        assert_eq!(meta.open_graph.images[0].url, "https://silho.ai/og.png");
        assert_eq!(meta.twitter.images, vec!["https://silho.ai/og.png".to_string()]);
        let v = serde_json::to_value(&meta).unwrap();
        assert_eq!(v["open_graph"]["type"], "website");
    }

    #[test]
    fn faq_schema_lists_every_question() {
        let faqs = vec![Faq::new("Q1", "A1"), Faq::new("Q2", "A2")];
        let v = faq_schema(&faqs);
        assert_eq!(v["@type"], "FAQPage");
        assert_eq!(v["mainEntity"][1]["acceptedAnswer"]["text"], "A2");
    }

    #[test]
    fn web_page_schema_points_at_page_url() {
        let v = web_page_schema(BASE, "/turn/x", "T", "D", "H", "B");
        assert_eq!(v["url"], "https://silho.ai/turn/x");
        assert_eq!(v["mainEntity"]["headline"], "H");
        assert_eq!(v["publisher"]["name"], SITE_NAME);
    }
}
