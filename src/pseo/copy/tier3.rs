//! Copy for `/content-repurposing/for/<persona>/<use-case>` pages.
//!
//! Template variables: `persona`, `persona_lc`, `use_case`, `use_case_lc`.

/// Hand-written sections for one (persona, use case) pair.
#[derive(Debug, Clone, Copy)]
pub struct Tier3Copy {
    pub persona: &'static str,
    pub use_case: &'static str,
    pub h1: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub how_it_works: &'static str,
}

pub const TITLE: &str = "{use_case} for {persona} | Content repurposing";
pub const DESCRIPTION: &str = "Content repurposing for {persona_lc}: {use_case_lc}. One source, many platforms. Paste once, ship everywhere. Built by Silho AI.";

pub const FALLBACK_H1: &str = "Content repurposing for {persona}: {use_case}";
pub const FALLBACK_BODY: &str = "Repurpose your content for {use_case_lc}. Built for {persona_lc}. One source, many platforms.";
pub const FALLBACK_CTA: &str = "Get started";
pub const FALLBACK_PROBLEM: &str = "Repurposing for {use_case_lc} takes time when you do it by hand—different formats and tones per platform. Most {persona_lc} end up posting the same copy everywhere or skipping channels.";
pub const FALLBACK_SOLUTION: &str = "Silho AI turns one piece into platform-native content for X, LinkedIn, Reddit, email, and more in one click. Built for {persona_lc}. Voice Lock keeps your voice consistent.";
pub const FALLBACK_HOW_IT_WORKS: &str = "Paste your content (or URL). Select your target platform. We generate native content in one click. Add voice samples so output sounds like you.";

/// Body used for pairs outside the catalog, where labels are humanised slugs.
pub const UNKNOWN_BODY: &str = "Repurpose your content for {use_case_lc}. Built for {persona_lc}. One source, many platforms—paste once, get platform-native output for X, LinkedIn, Reddit, email, and more.";

pub static TIER3_COPY: &[Tier3Copy] = &[
    Tier3Copy {
        persona: "founders",
        use_case: "build-in-public",
        h1: "Content repurposing for founders building in public",
        body: "You ship updates, threads, and product news. Silho AI turns one piece into platform-native posts for X, LinkedIn, Reddit, and more—so you stay consistent without rewriting everything by hand.",
        cta: "Repurpose your next update",
        problem: "Founders already write weekly updates, changelogs, and launch notes—but reformatting that same content for X, LinkedIn, Reddit, and email (length, tone, format) eats time you don't have. Most end up posting the same copy everywhere or skipping channels entirely. Result: one channel gets love, the rest get silence or copy-paste that doesn't fit.",
        solution: "Silho AI turns one piece of founder content (update, changelog, thread) into platform-native posts in one click. You paste once; we generate the right length, tone, and format for each channel. Voice Lock uses 5–10 of your existing posts so outputs sound like you, not generic AI. Built for solo founders who ship weekly and want distribution without a content team.",
        how_it_works: "Paste your update, thread, or changelog (or a URL for blogs/newsletters). Select your target platform—Twitter, LinkedIn, Reddit, email, or blog. We generate platform-native content in one click. Optionally add voice samples in Settings so every output keeps your founder voice. No manual reformatting; no thin cross-posts.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "build-in-public",
        h1: "Content repurposing for indie hackers building in public",
        body: "Ship one update, get a week of content. Silho AI turns your thread or blog into X, LinkedIn, Reddit, email—with your voice locked in. No generic AI tone.",
        cta: "Turn one post into many",
        problem: "Indie hackers ship fast and build in public, but rewriting the same thread or blog for X, LinkedIn, Reddit, and email (character limits, tone, community norms) takes time you'd rather spend building. Result: one channel gets love, the rest get copy-paste or silence. Your build-in-public voice gets diluted when you stretch one piece across platforms by hand.",
        solution: "Silho AI turns one build-in-public piece (thread, blog, newsletter) into platform-native content in one click. We match length, tone, and format to each channel so you don't sound like a bot. Voice Lock keeps your indie-hacker voice so outputs feel like you on X, LinkedIn, Reddit, and email. Built for solo builders who want one piece to feed every channel without rewriting.",
        how_it_works: "Paste your thread, blog, or newsletter (or a URL). Select your target—Twitter, LinkedIn, Reddit, email, or blog. We generate native content in one click. Add 5–10 sample posts in Voice Lock so every output sounds like you. No manual reformatting; no generic AI tone.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "product-launch",
        h1: "Content repurposing for your product launch",
        body: "One launch post shouldn't live in one place. Silho AI turns your launch content into Twitter threads, LinkedIn posts, Reddit announcements, and email—so every audience sees it in the right format.",
        cta: "Repurpose your launch content",
        problem: "You put real work into your launch post—but it lives in one place. Reformulating it for LinkedIn (professional tone, longer), Twitter (thread, hooks), Reddit (value-first, sub norms), and email (subject line, scannable body) takes hours. Most founders either skip channels or post the same copy everywhere, which falls flat on each platform.",
        solution: "Silho AI turns your launch post or thread into platform-native content for X, LinkedIn, Reddit, and email in one click. We keep the message; we change the format, length, and tone so each audience gets a version that fits. Voice Lock keeps your founder voice so launch content doesn't sound like a press release. Built for solo founders who want one launch to reach every audience.",
        how_it_works: "Paste your launch post, thread, or announcement. Select each target platform—Twitter, LinkedIn, Reddit, email. We generate native content for each in one click. Add voice samples so launch content sounds like you everywhere. No manual rewriting; no thin cross-posts.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "product-launch",
        h1: "Product launch content repurposing for indie hackers",
        body: "Launch once, distribute everywhere. Turn your launch post or thread into LinkedIn, Reddit, email, and more. Platform-native length and tone, one click.",
        cta: "Scale your launch",
        problem: "Indie hackers launch fast—but one post or thread doesn't automatically become a LinkedIn post, Reddit announcement, or email. Each platform needs different length, tone, and structure. Rewriting by hand eats time you'd rather spend on the product. Result: launch lives in one place, or you copy-paste and it falls flat elsewhere.",
        solution: "Silho AI turns your launch post or thread into platform-native content for LinkedIn, Reddit, email, and more in one click. We match each platform's norms so your launch doesn't sound like a cross-post. Voice Lock keeps your build-in-public voice so launch content feels authentic everywhere. Built for indie hackers who want one launch to drive distribution without a team.",
        how_it_works: "Paste your launch post or thread. Select targets—LinkedIn, Reddit, email, Twitter. We generate native content for each in one click. Add voice samples so launch sounds like you. No manual reformatting; no generic tone.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "content-batching",
        h1: "Content batching for founders",
        body: "Batch one deep piece per week and spread it everywhere. Silho AI turns that blog or newsletter into X, LinkedIn, Reddit, email—so you batch once and ship all week.",
        cta: "Batch and repurpose",
        problem: "Founders who batch content write one deep piece per week—blog, newsletter, or changelog—but turning that into a week of tweets, LinkedIn posts, Reddit posts, and email snippets is manual. Different lengths, tones, and formats per platform; most end up repurposing by hand or posting the same thing everywhere.",
        solution: "Silho AI turns one batched piece (blog, newsletter, changelog) into platform-native content for X, LinkedIn, Reddit, and email in one click. Batch once; we generate the right format for each channel so you ship all week without rewriting. Voice Lock keeps your tone consistent so batched content doesn't sound generic. Built for founders who want one piece to fuel a week of distribution.",
        how_it_works: "Paste your batched blog, newsletter, or changelog (or URL). Select each platform you want to feed. We generate native content for each in one click. Add voice samples so batched output sounds like you. No manual slicing; no thin repurposing.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "content-batching",
        h1: "Content batching for indie hackers",
        body: "Write once, ship everywhere. Silho AI batches your best content into platform-native posts. One thread or blog becomes a full week of distribution.",
        cta: "Batch your content",
        problem: "Indie hackers who batch write one thread or blog per week—but turning that into tweets, LinkedIn posts, Reddit posts, and email is manual. Each platform needs different length and tone; rewriting by hand burns time you'd rather spend building. Result: one piece gets love, the rest get copy-paste or nothing.",
        solution: "Silho AI turns one batched piece (thread, blog) into platform-native content for X, LinkedIn, Reddit, and email in one click. Write once; we generate the right format for each channel so you ship all week. Voice Lock keeps your build-in-public voice so batched content doesn't sound like a bot. Built for indie hackers who want one piece to drive a week of distribution.",
        how_it_works: "Paste your batched thread or blog (or URL). Select platforms—Twitter, LinkedIn, Reddit, email. We generate native content for each in one click. Add voice samples so output sounds like you. No manual reformatting; no generic tone.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "personal-brand",
        h1: "Content repurposing for founder personal brand",
        body: "Your voice should be consistent everywhere. Silho AI keeps your tone across X, LinkedIn, Reddit, and email—so your personal brand stays recognizable, not generic.",
        cta: "Build your brand",
        problem: "Founder personal brand depends on a consistent voice—but when you repurpose by hand, tone drifts. One post sounds like you; the next sounds like a template. When you use generic AI without tuning, everything sounds the same. Result: your brand gets diluted across channels.",
        solution: "Silho AI keeps your founder voice consistent across X, LinkedIn, Reddit, and email. Voice Lock uses 5–10 of your existing posts so every output sounds like you—not generic AI. You paste once; we generate platform-native content that keeps your tone. Built for founders who care about personal brand and don't want to sound like everyone else.",
        how_it_works: "Paste your content. Select target platform. We generate native output in one click. Add voice samples in Settings so every piece keeps your founder voice. No tone drift; no generic AI sound.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "personal-brand",
        h1: "Personal brand repurposing for indie hackers",
        body: "One voice, every platform. Silho AI uses Voice Lock so your posts sound like you on X, LinkedIn, Reddit, and email. Scale your brand without losing authenticity.",
        cta: "Lock your voice",
        problem: "Indie hacker brand is about authenticity—but when you repurpose by hand or use untuned AI, tone drifts. One post sounds like you; the next sounds like a bot. Copy-pasting the same thing everywhere doesn't scale and doesn't feel authentic.",
        solution: "Silho AI keeps your indie-hacker voice consistent across X, LinkedIn, Reddit, and email. Voice Lock uses your existing posts so every output sounds like you—not generic AI. Paste once; we generate platform-native content that keeps your build-in-public voice. Built for indie hackers who want to scale distribution without losing authenticity.",
        how_it_works: "Paste your content. Select platform. We generate native output in one click. Add 5–10 sample posts in Voice Lock so every piece sounds like you. No generic tone; no brand drift.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "distribution",
        h1: "Distribution scaling for founders",
        body: "Reach every audience without 10x the work. Silho AI turns one piece into platform-native content for X, LinkedIn, Reddit, email, and more—so you scale distribution, not hours.",
        cta: "Scale distribution",
        problem: "Founders know distribution matters—but reaching X, LinkedIn, Reddit, email, and blog with one piece means rewriting for each. Different lengths, tones, and formats; manual work doesn't scale. Most founders either stick to one channel or post the same copy everywhere and get weak results.",
        solution: "Silho AI turns one piece into platform-native content for X, LinkedIn, Reddit, email, and blog in one click. You scale distribution without 10x the work. Voice Lock keeps your founder voice so every channel gets content that sounds like you. Built for founders who want to reach every audience without a content team.",
        how_it_works: "Paste your content (or URL). Select each platform you want to feed. We generate native content for each in one click. Add voice samples so distribution scales without losing your voice. No manual rewriting; no thin cross-posts.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "distribution",
        h1: "Distribution scaling for indie hackers",
        body: "One piece, many channels. Silho AI turns your content into the right format for each platform. Scale distribution without burning out.",
        cta: "Scale your reach",
        problem: "Indie hackers want to be everywhere—but one piece doesn't automatically work on X, LinkedIn, Reddit, and email. Each platform has different norms; rewriting by hand doesn't scale. Result: one channel gets love, the rest get copy-paste or silence.",
        solution: "Silho AI turns one piece into platform-native content for X, LinkedIn, Reddit, email, and more in one click. Scale distribution without burning out. Voice Lock keeps your build-in-public voice so every channel gets content that sounds like you. Built for indie hackers who want one piece to drive every channel.",
        how_it_works: "Paste your content. Select platforms. We generate native content for each in one click. Add voice samples so scaling doesn't dilute your voice. No manual reformatting; no generic tone.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "newsletter-growth",
        h1: "Content repurposing for newsletter growth",
        body: "Turn one newsletter or blog into signup drivers, social teases, and lead magnets. Silho AI generates platform-native content that hooks and converts—so you grow your list without rewriting by hand.",
        cta: "Repurpose for growth",
        problem: "You put real work into your newsletter—but it lives in one place. Turning the best bits into signup drivers, social teases, and lead magnets for X, LinkedIn, and email takes manual slicing. Most founders either underuse the content or copy-paste the same promo everywhere.",
        solution: "Silho AI turns one newsletter (or blog) into platform-native content that drives signups and engagement. Paste once; we generate teasers, threads, and email snippets that hook and convert. Voice Lock keeps your voice so growth content doesn't sound like a bot. Built for founders who want one piece to fuel newsletter growth.",
        how_it_works: "Paste your newsletter or blog URL (or copy). Select target—Twitter, LinkedIn, email. We generate native content in one click. Use output as signup drivers, social teases, or lead magnets. Add voice samples so growth content sounds like you.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "newsletter-growth",
        h1: "Newsletter growth repurposing for indie hackers",
        body: "One piece, many growth channels. Silho AI turns your newsletter or blog into teasers, threads, and snippets that drive signups and engagement. Built for indie hackers who want list growth without a content team.",
        cta: "Grow your list",
        problem: "Indie hackers who write newsletters struggle to repurpose that content for social and signup—different length, tone, and CTA per channel. Manual slicing eats time you'd rather spend building. Result: one edition gets one audience, or you recycle the same link everywhere.",
        solution: "Silho AI turns one newsletter or blog into content that drives signups and engagement across X, LinkedIn, and email. One piece; we generate teasers, threads, and snippets that fit each platform. Voice Lock keeps your voice. Built for indie hackers who want newsletter growth without a content team.",
        how_it_works: "Paste your newsletter or blog. Select platforms. We generate native content in one click. Use for signup drivers and social. Add voice samples so output sounds like you.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "seo",
        h1: "Content repurposing for SEO and organic reach",
        body: "Turn one piece into SEO-ready blog and platform-native social. Silho AI preserves depth and structure for ranking while generating the right format for each channel—so you get organic reach without 10x the writing.",
        cta: "Repurpose for SEO",
        problem: "You create deep content—but turning it into SEO-friendly blog posts, meta, and organic social that ranks and converts takes manual restructuring. Different formats (blog, thread, LinkedIn) need different structure and keywords; one draft rarely does all.",
        solution: "Silho AI turns one piece (blog, video, podcast) into SEO-ready long-form and platform-native social in one click. We preserve depth and structure for ranking while generating the right format for each channel. Voice Lock keeps your authority tone. Built for founders who want organic reach without 10x the writing.",
        how_it_works: "Paste your content or URL. Select target—blog (SEO), Twitter, LinkedIn, email. We generate native, structured output in one click. Add voice samples so organic content sounds like you. No manual rewriting for each format.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "seo",
        h1: "SEO and organic repurposing for indie hackers",
        body: "One piece, blog and social. Silho AI turns your content into SEO-friendly long-form and platform-native posts so you get organic reach without duplicate or thin content.",
        cta: "Scale organic reach",
        problem: "Indie hackers who care about SEO struggle to repurpose one piece into blog, threads, and LinkedIn without thin or duplicate content. Manual reformatting for each channel burns time. Result: one format gets love, the rest get copy-paste or nothing.",
        solution: "Silho AI turns one piece into SEO-friendly blog and platform-native social in one click. We match structure and tone to each format so you get organic reach without duplicate or thin content. Voice Lock keeps your voice. Built for indie hackers who want SEO and distribution from one piece.",
        how_it_works: "Paste your content. Select blog, Twitter, LinkedIn, or email. We generate native output in one click. Add voice samples so SEO content sounds like you.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "community",
        h1: "Content repurposing for community engagement",
        body: "Turn one update or launch into community-native content for Reddit, Discord, and more. Silho AI generates value-first, norm-fitting posts—so you show up everywhere without copying and pasting.",
        cta: "Repurpose for community",
        problem: "You want to show up in community—Discord, Reddit, Slack—but reformatting the same update or launch for each space (tone, length, norms) is manual. Post the same thing everywhere and you sound like a bot; skip channels and you leave reach on the table.",
        solution: "Silho AI turns one piece into community-native content: value-first Reddit posts, Discord-friendly updates, and engagement-ready snippets. Paste once; we generate the right length and tone for each space. Voice Lock keeps your voice so community content doesn't sound like marketing. Built for founders who want to show up everywhere without copying and pasting.",
        how_it_works: "Paste your update, launch, or thread. Select target—Reddit, email, or use output for Discord/Slack. We generate native content in one click. Add voice samples so community posts sound like you.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "community",
        h1: "Community engagement repurposing for indie hackers",
        body: "One piece, every community. Silho AI turns your content into Reddit posts, Discord-style updates, and more so you show up without sounding like a bot.",
        cta: "Show up in community",
        problem: "Indie hackers who build in community struggle to repurpose one piece for Reddit, Discord, and Slack—each has different norms and length. Manual rewrites eat time. Result: one community gets the update, the rest get silence or copy-paste that doesn't fit.",
        solution: "Silho AI turns one piece into community-native content for Reddit, Discord-style updates, and more. We match tone and length to each space so you show up without sounding like a bot. Voice Lock keeps your build-in-public voice. Built for indie hackers who want one piece to feed every community.",
        how_it_works: "Paste your content. Select Reddit, email, or use output for Discord/Slack. We generate native content in one click. Add voice samples so community content sounds like you.",
    },
    Tier3Copy {
        persona: "founders",
        use_case: "webinar-repurpose",
        h1: "Webinar repurposing for founders",
        body: "Turn one webinar into social clips, email sequences, and blog posts. Silho AI extracts key moments and shapes them for each format—so one webinar drives ongoing distribution.",
        cta: "Repurpose your webinar",
        problem: "Webinars are high-intent—but turning them into social clips, email sequences, and blog posts means transcription, editing, and reformatting for each channel. Most founders either leave the recording as-is or post one generic clip everywhere.",
        solution: "Silho AI turns webinar content (transcript or URL) into platform-native posts, email snippets, and blog-ready pieces in one click. We extract key moments and shape them for each format. Voice Lock keeps your voice so webinar repurposing doesn't sound like a script. Built for founders who want one webinar to drive ongoing distribution.",
        how_it_works: "Paste your webinar transcript or URL. Select target—Twitter, LinkedIn, email, blog. We generate native content in one click. Add voice samples so repurposed webinar content sounds like you.",
    },
    Tier3Copy {
        persona: "indie-hackers",
        use_case: "webinar-repurpose",
        h1: "Webinar repurposing for indie hackers",
        body: "One webinar, a week of content. Silho AI turns your transcript or URL into threads, posts, and email so you get distribution without manual slicing.",
        cta: "Turn webinar into content",
        problem: "Indie hackers who run webinars rarely repurpose them beyond one recap—turning a 60-minute session into threads, posts, and email is manual. Result: the webinar lives in one place, or you copy-paste the same summary everywhere.",
        solution: "Silho AI turns webinar content into platform-native threads, posts, and email in one click. Paste transcript or URL; we extract key moments and format for each channel. Voice Lock keeps your voice. Built for indie hackers who want one webinar to fuel a week of content.",
        how_it_works: "Paste your webinar transcript or URL. Select Twitter, LinkedIn, email, or blog. We generate native content in one click. Add voice samples so output sounds like you.",
    },
];

pub fn tier3_copy(persona: &str, use_case: &str) -> Option<&'static Tier3Copy> {
    TIER3_COPY
        .iter()
        .find(|c| c.persona == persona && c.use_case == use_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseo::axes::USE_CASES;

    #[test]
    fn founders_and_indie_hackers_cover_every_use_case() {
        for use_case in USE_CASES.iter() {
            assert!(tier3_copy("founders", use_case.slug).is_some(), "{}", use_case.slug);
            assert!(tier3_copy("indie-hackers", use_case.slug).is_some(), "{}", use_case.slug);
        }
        assert_eq!(TIER3_COPY.len(), USE_CASES.len() * 2);
        assert!(tier3_copy("coaches", "seo").is_none());
    }
}
