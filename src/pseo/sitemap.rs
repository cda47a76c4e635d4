//! sitemap.xml and robots.txt.

use crate::pseo::catalog::Catalog;
use anyhow::Result;
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use std::fmt;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Private application routes that must not be crawled.
pub const ROUTES_DISALLOW: [&str; 9] = [
    "/dashboard",
    "/new",
    "/history",
    "/history/*",
    "/settings",
    "/auth/callback",
    "/auth/dev-login",
    "/admin",
    "/api/",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Marketing pages listed ahead of the pSEO pages: (path, frequency, priority).
const STATIC_PAGES: [(&str, ChangeFrequency, f32); 3] = [
    ("", ChangeFrequency::Weekly, 1.0),
    ("/sign-in", ChangeFrequency::Monthly, 0.6),
    ("/sign-up", ChangeFrequency::Monthly, 0.8),
];

/// Static pages followed by every catalog path.
pub fn entries(
    catalog: &Catalog,
    base_url: &str,
    pseo_frequency: ChangeFrequency,
    pseo_priority: f32,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let statics = STATIC_PAGES.iter().map(|(path, freq, priority)| SitemapEntry {
        loc: format!("{base_url}{path}"),
        last_modified: now,
        change_frequency: *freq,
        priority: *priority,
    });
    let pseo = catalog.all_paths().into_iter().map(|path| SitemapEntry {
        loc: format!("{base_url}{path}"),
        last_modified: now,
        change_frequency: pseo_frequency,
        priority: pseo_priority,
    });
    statics.chain(pseo).collect()
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn to_xml(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;
    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.loc)?;
        text_element(
            &mut writer,
            "lastmod",
            &entry.last_modified.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        )?;
        text_element(&mut writer, "changefreq", &entry.change_frequency.to_string())?;
        text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

pub fn robots_txt(base_url: &str) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for route in ROUTES_DISALLOW {
        out.push_str("Disallow: ");
        out.push_str(route);
        out.push('\n');
    }
    out.push_str(&format!("\nSitemap: {base_url}/sitemap.xml\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn static_pages_come_first() {
        let catalog = Catalog::build();
        let list = entries(&catalog, "https://silho.ai", ChangeFrequency::Monthly, 0.7, fixed_now());
        assert_eq!(list.len(), 3 + 820);
        assert_eq!(list[0].loc, "https://silho.ai");
        assert_eq!(list[0].priority, 1.0);
        assert_eq!(list[2].loc, "https://silho.ai/sign-up");
        assert_eq!(list[3].loc, "https://silho.ai/repurpose/repurpose-blog-post-to-twitter");
        assert_eq!(list[3].change_frequency, ChangeFrequency::Monthly);
        assert_eq!(list.last().unwrap().loc, "https://silho.ai/turn/blog-post-into-5-tiktok-scripts");
    }

    #[test]
    fn xml_has_one_url_per_entry() {
        let list = vec![SitemapEntry {
            loc: "https://silho.ai/a?b=1&c=2".into(),
            last_modified: fixed_now(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.7,
        }];
        let xml = to_xml(&list).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(SITEMAP_NS));
        assert!(xml.contains("<loc>https://silho.ai/a?b=1&amp;c=2</loc>"));
        assert!(xml.contains("<lastmod>2025-03-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn robots_disallows_private_routes() {
        let robots = robots_txt("https://silho.ai");
        assert!(robots.contains("Allow: /\n"));
        assert!(robots.contains("Disallow: /api/\n"));
        assert!(robots.contains("Disallow: /history/*\n"));
        assert!(robots.ends_with("Sitemap: https://silho.ai/sitemap.xml\n"));
    }
}
