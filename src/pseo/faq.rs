//! FAQ blocks rendered from question/answer templates.

use crate::model::{AxisValue, Faq};
use crate::pseo::copy::fill;

type FaqTemplate = (&'static str, &'static str);

static REPURPOSE_FAQS: [FaqTemplate; 5] = [
    (
        "How do I turn a {source_lc} into {target} content?",
        "Paste your {source_lc} (or paste a URL for blogs, newsletters, or articles) into Silho AI, select {target} as the target, and click generate. We produce platform-native content with the right length, tone, and format. You can add 5–10 voice samples in Settings so the output sounds like you.",
    ),
    (
        "How long does it take to repurpose {source_lc} for {target}?",
        "Silho AI generates {target}-ready content in one click. You paste once and get output you can edit or publish. No manual reformatting—we handle length, structure, and platform norms so you don't have to.",
    ),
    (
        "Can I keep my own voice when repurposing to {target}?",
        "Yes. Voice Lock uses 5–10 sample posts of yours (from any platform) so generated content matches your tone and style. Built for {who} who want distribution without sounding like a bot.",
    ),
    (
        "What formats can I repurpose from?",
        "We support blog posts, Twitter/X threads, single tweets, YouTube videos, podcasts, newsletters, changelogs, and case studies. Paste text or a URL (for blogs and newsletters); we generate {target}-native output.",
    ),
    (
        "Is Silho AI built for {persona}?",
        "Yes. Silho AI is built by founders who ship weekly. We built it for solo founders and indie hackers who repurpose by hand and want one place to turn one piece into platform-native content—without losing their voice. No content team required.",
    ),
];

static TIER3_FAQS: [FaqTemplate; 4] = [
    (
        "What is content repurposing for {persona_lc}?",
        "Content repurposing means turning one piece of content (a thread, blog, newsletter, or changelog) into platform-native posts for X, LinkedIn, Reddit, email, and more. Silho AI does this in one click so {persona_lc} can ship weekly without a content team.",
    ),
    (
        "How does Silho AI help with {use_case_lc}?",
        "Silho AI turns one piece into the right format for each platform—length, tone, and structure. You paste once; we generate native content for Twitter, LinkedIn, Reddit, email, and blog. Voice Lock keeps your voice consistent. Built for {persona_lc} who {use_case_lc}.",
    ),
    (
        "Do I need to write different copy for each platform?",
        "No. Paste one piece (update, thread, blog, or newsletter) and select each target platform. We generate platform-native content for each in one click. You can edit before publishing. No manual reformatting.",
    ),
    (
        "Who is Silho AI for?",
        "Silho AI is built for solo founders and indie hackers who ship weekly and want distribution without a content team. We built it because we were repurposing by hand; this reflects what we've learned helping builders scale distribution.",
    ),
];

static TIER4_FAQS: [FaqTemplate; 4] = [
    (
        "How do I turn one {source_lc} into {count} {target_lc} posts?",
        "Paste your {source_lc} (or URL if it's a blog or newsletter) into Silho AI, select {target} as the target, and click generate. We produce {count} platform-native posts (or a thread) in one click. You can add voice samples in Settings so the output sounds like you.",
    ),
    (
        "How long does it take?",
        "Silho AI generates {count} {target_lc} posts in one click. Paste once, get output you can edit or schedule. No manual slicing or reformatting.",
    ),
    (
        "Can I use my own voice?",
        "Yes. Voice Lock uses 5–10 sample posts of yours so generated content matches your tone. Built for founders and indie hackers who want distribution without sounding like a bot.",
    ),
    (
        "What can I repurpose from?",
        "We support blog posts, Twitter/X threads, single tweets, YouTube videos, podcasts, newsletters, changelogs, and case studies. Paste text or a URL; we generate {target}-native output.",
    ),
];

fn render(templates: &[FaqTemplate], vars: &[(&str, &str)]) -> Vec<Faq> {
    templates
        .iter()
        .map(|(q, a)| Faq::new(fill(q, vars), fill(a, vars)))
        .collect()
}

pub fn repurpose_faqs(source: &AxisValue, target: &AxisValue, persona: Option<&AxisValue>) -> Vec<Faq> {
    let source_lc = source.label_lower();
    let who = persona
        .map(|p| p.label_lower())
        .unwrap_or_else(|| "founders and indie hackers".to_string());
    let persona_label = persona.map(|p| p.label).unwrap_or("founders");
    render(
        &REPURPOSE_FAQS,
        &[
            ("source_lc", &source_lc),
            ("target", target.label),
            ("who", &who),
            ("persona", persona_label),
        ],
    )
}

/// `use_case_lc` is the use case slug with dashes replaced by spaces.
pub fn tier3_faqs(persona_label: &str, use_case_slug: &str) -> Vec<Faq> {
    let persona_lc = persona_label.to_lowercase();
    let use_case_lc = use_case_slug.replace('-', " ");
    render(
        &TIER3_FAQS,
        &[("persona_lc", &persona_lc), ("use_case_lc", &use_case_lc)],
    )
}

pub fn tier4_faqs(source_label: &str, target_label: &str, count: u32) -> Vec<Faq> {
    let source_lc = source_label.to_lowercase();
    let target_lc = target_label.to_lowercase();
    let count = count.to_string();
    render(
        &TIER4_FAQS,
        &[
            ("source_lc", &source_lc),
            ("target", target_label),
            ("target_lc", &target_lc),
            ("count", &count),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseo::axes;

    #[test]
    fn repurpose_faqs_mention_the_pair() {
        let source = axes::source("podcast").unwrap();
        let target = axes::target("reddit").unwrap();
        let faqs = repurpose_faqs(&source, &target, None);
        assert_eq!(faqs.len(), 5);
        assert_eq!(faqs[0].question, "How do I turn a podcast episode into Reddit content?");
        assert!(faqs[2].answer.contains("founders and indie hackers"));
        assert_eq!(faqs[4].question, "Is Silho AI built for founders?");
        assert!(faqs.iter().all(|f| !f.question.contains('{') && !f.answer.contains('{')));
    }

    #[test]
    fn persona_changes_voice_and_audience_answers() {
        let source = axes::source("tweet").unwrap();
        let target = axes::target("linkedin").unwrap();
        let persona = axes::persona("marketers").unwrap();
        let faqs = repurpose_faqs(&source, &target, Some(&persona));
        assert!(faqs[2].answer.contains("Built for marketers who"));
        assert_eq!(faqs[4].question, "Is Silho AI built for Marketers?");
    }

    #[test]
    fn tier3_and_tier4_faqs_fill_every_placeholder() {
        let t3 = tier3_faqs("Indie hackers", "build-in-public");
        assert_eq!(t3.len(), 4);
        assert!(t3[1].question.contains("build in public"));
        let t4 = tier4_faqs("Blog post", "LinkedIn", 5);
        assert_eq!(t4[0].question, "How do I turn one blog post into 5 linkedin posts?");
        for faq in t3.iter().chain(t4.iter()) {
            assert!(!faq.question.contains('{') && !faq.answer.contains('{'));
        }
    }
}
