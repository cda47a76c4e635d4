//! Copy for `/turn/<slug>` outcome pages.
//!
//! Template variables: `source`, `source_lc`, `target`, `target_lc`, `count`.

/// A hand-written outcome page. Labels are the page's own wording and may
/// differ from the axis labels (e.g. "One tweet").
#[derive(Debug, Clone, Copy)]
pub struct OutcomeCopy {
    pub slug: &'static str,
    pub source: &'static str,
    pub source_label: &'static str,
    pub target: &'static str,
    pub target_label: &'static str,
    pub count: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub h1: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
}

pub static CURATED_OUTCOMES: &[OutcomeCopy] = &[
    OutcomeCopy {
        slug: "blog-post-into-10-twitter-posts",
        source: "blog-post",
        source_label: "Blog post",
        target: "twitter",
        target_label: "Twitter/X",
        count: 10,
        title: "Turn one blog post into 10 Twitter posts",
        description: "Turn one blog post into 10 Twitter posts. Paste your blog, get 10 platform-native tweets or thread. One click.",
        h1: "Turn one blog post into 10 Twitter posts",
        body: "One blog post can become a full week of tweets. Paste your post, select Twitter, and get 10 platform-native tweets—or a thread—in one click. Voice Lock keeps your tone.",
        cta: "Turn your blog into tweets",
    },
    OutcomeCopy {
        slug: "one-tweet-into-5-linkedin-posts",
        source: "tweet",
        source_label: "One tweet",
        target: "linkedin",
        target_label: "LinkedIn",
        count: 5,
        title: "Turn one tweet into 5 LinkedIn posts",
        description: "Turn one tweet into 5 LinkedIn posts. Expand your best tweet into thought-leadership posts. One click.",
        h1: "Turn one tweet into 5 LinkedIn posts",
        body: "Your best tweet can become a week of LinkedIn. Paste it, get 5 thought-leadership style posts with the right length and format. Voice Lock optional.",
        cta: "Expand your tweet",
    },
    OutcomeCopy {
        slug: "newsletter-into-10-twitter-posts",
        source: "newsletter",
        source_label: "Newsletter",
        target: "twitter",
        target_label: "Twitter/X",
        count: 10,
        title: "Turn your newsletter into 10 Twitter posts",
        description: "Turn your newsletter into 10 Twitter posts. One edition, 10 tweets or a thread. Paste the URL or text.",
        h1: "Turn your newsletter into 10 Twitter posts",
        body: "One newsletter edition can fuel a week of tweets. Paste the URL or paste the text—get 10 platform-native tweets or a thread. No manual slicing.",
        cta: "Repurpose your newsletter",
    },
    OutcomeCopy {
        slug: "twitter-thread-into-5-linkedin-posts",
        source: "twitter-thread",
        source_label: "Twitter thread",
        target: "linkedin",
        target_label: "LinkedIn",
        count: 5,
        title: "Turn a Twitter thread into 5 LinkedIn posts",
        description: "Turn a Twitter thread into 5 LinkedIn posts. One thread, five thought-leadership posts. One click.",
        h1: "Turn a Twitter thread into 5 LinkedIn posts",
        body: "Your best thread deserves a second life on LinkedIn. Paste the thread, get 5 posts with the right length and professional tone. Voice Lock keeps your voice.",
        cta: "Turn your thread into LinkedIn",
    },
    OutcomeCopy {
        slug: "blog-post-into-5-linkedin-posts",
        source: "blog-post",
        source_label: "Blog post",
        target: "linkedin",
        target_label: "LinkedIn",
        count: 5,
        title: "Turn one blog post into 5 LinkedIn posts",
        description: "Turn one blog post into 5 LinkedIn posts. One post, five thought-leadership pieces. One click.",
        h1: "Turn one blog post into 5 LinkedIn posts",
        body: "One long-form post can become a week of LinkedIn. Paste your blog, get 5 platform-native posts. Perfect for founders and indie hackers.",
        cta: "Repurpose your blog for LinkedIn",
    },
    OutcomeCopy {
        slug: "podcast-into-5-linkedin-posts",
        source: "podcast",
        source_label: "Podcast episode",
        target: "linkedin",
        target_label: "LinkedIn",
        count: 5,
        title: "Turn one podcast into 5 LinkedIn posts",
        description: "Turn one podcast episode into 5 LinkedIn posts. Paste transcript or URL, get thought-leadership posts. One click.",
        h1: "Turn one podcast into 5 LinkedIn posts",
        body: "One podcast episode can fuel a week of LinkedIn. Paste transcript or URL, get 5 platform-native posts with the right length and professional tone. Voice Lock keeps your voice.",
        cta: "Repurpose your podcast for LinkedIn",
    },
    OutcomeCopy {
        slug: "youtube-video-into-10-twitter-posts",
        source: "youtube-video",
        source_label: "YouTube video",
        target: "twitter",
        target_label: "Twitter/X",
        count: 10,
        title: "Turn one YouTube video into 10 Twitter posts",
        description: "Turn one YouTube video into 10 Twitter posts. Paste URL or transcript, get tweets or a thread. One click.",
        h1: "Turn one YouTube video into 10 Twitter posts",
        body: "One video can become a week of tweets. Paste URL or transcript, get 10 platform-native tweets or a thread. Voice Lock keeps your tone. No manual slicing.",
        cta: "Turn your video into tweets",
    },
    OutcomeCopy {
        slug: "changelog-into-5-linkedin-posts",
        source: "changelog",
        source_label: "Changelog",
        target: "linkedin",
        target_label: "LinkedIn",
        count: 5,
        title: "Turn one changelog into 5 LinkedIn posts",
        description: "Turn one changelog into 5 LinkedIn posts. Ship the update in thought-leadership format. One click.",
        h1: "Turn one changelog into 5 LinkedIn posts",
        body: "One changelog can become a week of LinkedIn. Paste your update, get 5 platform-native posts—founder voice, not press release. Voice Lock keeps your tone.",
        cta: "Repurpose your changelog for LinkedIn",
    },
    OutcomeCopy {
        slug: "newsletter-into-5-linkedin-posts",
        source: "newsletter",
        source_label: "Newsletter",
        target: "linkedin",
        target_label: "LinkedIn",
        count: 5,
        title: "Turn one newsletter into 5 LinkedIn posts",
        description: "Turn one newsletter edition into 5 LinkedIn posts. One edition, five thought-leadership pieces. One click.",
        h1: "Turn one newsletter into 5 LinkedIn posts",
        body: "One newsletter can fuel a week of LinkedIn. Paste URL or copy, get 5 platform-native posts. Voice Lock keeps your voice. No manual slicing.",
        cta: "Repurpose your newsletter for LinkedIn",
    },
    OutcomeCopy {
        slug: "blog-post-into-5-tiktok-scripts",
        source: "blog-post",
        source_label: "Blog post",
        target: "tiktok",
        target_label: "TikTok",
        count: 5,
        title: "Turn one blog post into 5 TikTok scripts",
        description: "Turn one blog post into 5 TikTok scripts. Hook in the first second, vertical pacing. One click.",
        h1: "Turn one blog post into 5 TikTok scripts",
        body: "One blog can become a week of TikToks. Paste your post, get 5 script-style captions with hook, pacing, and CTA. Voice Lock keeps your tone. Native short-form, not a cut-down long video.",
        cta: "Turn your blog into TikToks",
    },
];

pub const H1: &str = "Turn one {source} into {count} {target} posts";
pub const DESCRIPTION: &str = "Turn one {source} into {count} {target} posts. Paste once, get {count} platform-native {target} posts. One click.";
pub const BODY: &str = "One {source_lc} can become {count} {target_lc} posts. Paste your {source_lc}, select {target}, and get {count} platform-native posts in one click. Voice Lock keeps your tone.";
pub const CTA_SINGLE: &str = "Turn your {source} into {target}";
pub const CTA_MANY: &str = "Get {count} {target} posts";

pub const FALLBACK_COUNT: u32 = 5;
pub const FALLBACK_H1: &str = "Turn your content into more";
pub const FALLBACK_TITLE: &str = "Turn your content into more | {human}";
pub const FALLBACK_DESCRIPTION: &str = "Turn your content into more. Repurpose in one click. Paste once, get platform-native output.";
pub const FALLBACK_BODY: &str = "Repurpose your content in one click. Paste your blog, thread, newsletter, or changelog—get platform-native posts for X, LinkedIn, Reddit, email, and more. Built for founders and indie hackers.";
pub const FALLBACK_CTA: &str = "Repurpose now";

pub fn curated(slug: &str) -> Option<&'static OutcomeCopy> {
    CURATED_OUTCOMES.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn curated_pages_are_unique_and_reference_axis_values() {
        let slugs: HashSet<_> = CURATED_OUTCOMES.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), CURATED_OUTCOMES.len());
        for c in CURATED_OUTCOMES {
            assert!(crate::pseo::axes::source(c.source).is_some(), "{}", c.slug);
            assert!(crate::pseo::axes::target(c.target).is_some(), "{}", c.slug);
            assert!(c.count >= 1);
            assert!(c.h1.contains(&c.count.to_string()), "{}", c.slug);
        }
    }
}
