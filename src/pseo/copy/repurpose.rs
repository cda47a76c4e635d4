//! Copy for `repurpose-<source>-to-<target>[-for-<persona>]` pages.
//!
//! Combination keys are `<source>-to-<target>`. Template variables:
//! `source`, `source_lc`, `target`, `target_lc`, `persona`, `persona_lc`.

/// Why each source format is hard to repurpose. Only the first two are used
/// as pain points; the third is kept for copy review.
pub static SOURCE_PAINS: &[(&str, [&str; 3])] = &[
    ("blog-post", [
        "Long-form posts have multiple angles—picking one for a short post takes time.",
        "Key quotes and takeaways are buried in paragraphs; manual extraction is tedious.",
        "Tone and depth that work for reading don't match platform norms (e.g. Twitter threads, LinkedIn).",
    ]),
    ("twitter-thread", [
        "Threads are long and nested—turning them into one LinkedIn post or email requires heavy editing.",
        "Tweet-length chunks don't map 1:1 to other formats; you end up rewriting, not repurposing.",
        "Hashtags and @mentions don't translate; each platform has its own conventions.",
    ]),
    ("tweet", [
        "One tweet is short—expanding it for LinkedIn or a newsletter without fluff is hard.",
        "The hook that works on X may not fit professional or long-form tone elsewhere.",
        "You have to invent structure (sections, CTA) that the original tweet doesn't have.",
    ]),
    ("youtube-video", [
        "Video has to be transcribed or summarized before you can turn it into text for other platforms.",
        "Key moments and quotes aren't obvious without watching; manual note-taking is slow.",
        "Tone and pacing from video don't automatically translate to written formats.",
    ]),
    ("podcast", [
        "Long episodes have many topics—choosing what to pull for a single post or thread is subjective.",
        "Transcription is step one; then you still have to shape it for each platform.",
        "Conversational tone and tangents need tightening for LinkedIn, Twitter, or email.",
    ]),
    ("newsletter", [
        "Newsletters mix updates, links, and personality—slicing into platform-sized pieces is manual.",
        "Sections that work in email (length, formatting) don't map directly to social posts.",
        "You want to reuse the best bits without sounding like you're recycling the same email.",
    ]),
    ("changelog", [
        "Changelogs are dense and technical—making them engaging for Twitter or LinkedIn takes rewriting.",
        "You need both accuracy (for existing users) and punch (for distribution); one draft rarely does both.",
        "Different audiences (users vs. prospects) need different angles from the same update.",
    ]),
    ("case-study", [
        "Case studies are long and narrative—extracting proof points for social or email is manual.",
        "Quotes and metrics need to stand alone without the full story; that's extra editing.",
        "B2B tone for case studies often needs softening or shortening for Twitter or LinkedIn.",
    ]),
    ("webinar", [
        "Webinars are long and dense—turning key moments into social posts or email requires transcription and editing.",
        "Q&A and tangents don't map to platform formats; you have to pick the best clips and rewrite.",
        "Different audiences (attendees vs. prospects) need different angles from the same recording.",
    ]),
    ("loom", [
        "Loom and screen recordings are informal—shaping them for LinkedIn or blog needs structure and polish.",
        "Verbal explanations don't translate 1:1 to written posts; you have to extract the insight and reframe.",
        "Short format works for internal use but needs expansion or slicing for external distribution.",
    ]),
    ("notion", [
        "Notion docs mix structure and freeform—slicing into platform-sized pieces is manual.",
        "Internal tone and jargon need translation for public posts; one draft rarely works everywhere.",
        "Sections that work in a doc don't map directly to hooks and CTAs for social.",
    ]),
    ("pdf", [
        "PDFs and whitepapers are long-form—turning them into threads or posts means summarizing and restructuring.",
        "Dense content needs distillation for character limits and feed-friendly format.",
        "Authority tone in a PDF often needs softening or shortening for Twitter or LinkedIn.",
    ]),
];

/// What each target platform expects from a post.
pub static TARGET_NEEDS: &[(&str, [&str; 3])] = &[
    ("twitter", [
        "Short hooks and clear thread structure; character limits per tweet.",
        "Punchy tone and scannable format—readers scroll fast.",
        "Hashtags and CTAs that fit X culture without sounding like bots.",
    ]),
    ("linkedin", [
        "Professional tone and thought-leadership angle; longer than Twitter, shorter than a blog.",
        "Opening line that works in the feed; formatting (line breaks, bullets) that reads on mobile.",
        "No hashtag stuffing; subtle CTA that fits a professional audience.",
    ]),
    ("reddit", [
        "Value-first tone; fits the sub's norms and avoids self-promo language.",
        "Context and authenticity—sounds like a human, not a brand.",
        "Length and format that match the sub (e.g. r/SaaS vs. r/startups).",
    ]),
    ("email", [
        "Subject line and preview that drive opens; scannable sections and clear CTA.",
        "Personal tone and structure (greeting, body, sign-off) that fits your list.",
        "Length that respects inbox attention; no wall of text.",
    ]),
    ("youtube-shorts", [
        "Script or captions in Shorts format: hook in first seconds, tight narrative.",
        "Vertical-friendly pacing; text overlays that work on mobile.",
        "CTA that fits short-form (subscribe, link in description).",
    ]),
    ("blog", [
        "Full structure: intro, sections, conclusion; SEO-friendly without sounding generic.",
        "Depth and narrative that justify a long-form read; not just a stretched social post.",
        "Internal links and CTAs that fit your site's content strategy.",
    ]),
    ("tiktok", [
        "Hook in the first second; vertical format and tight pacing; captions that work without sound.",
        "Trend-aware tone and length; CTA that fits short-form (link in bio, follow).",
        "Native feel—not a cut-down YouTube video; built for scroll and share.",
    ]),
    ("instagram", [
        "Feed posts: caption length and structure; carousel narrative; hashtag strategy.",
        "Reels: hook, pacing, and CTA; format that works in Explore and profile.",
        "Professional or creator tone that fits your niche; not a cross-post from another platform.",
    ]),
    ("threads", [
        "Conversational tone; length and format that work in the Threads feed.",
        "Hook and CTA that drive engagement; fits Meta ecosystem without duplicating Instagram.",
        "Native feel—readable, shareable, and on-brand for Threads audience.",
    ]),
];

pub const PAIN_POINT_NEED: &str = "{target} needs: {need}";

/// Hand-written lead paragraphs for the strongest combinations.
pub static INTROS: &[(&str, &str)] = &[
    ("youtube-video-to-reddit", "Turn YouTube videos into Reddit posts that fit the sub. One video, one click—value-first Reddit content without rewriting or sounding like marketing."),
    ("youtube-video-to-blog", "Turn YouTube videos into blog posts with structure and depth. One video, one click—SEO-friendly long-form content without manual transcription."),
    ("youtube-video-to-twitter", "Turn YouTube videos into Twitter threads that hook and convert. One video, one click—punchy threads without rewatching and rewriting."),
    ("youtube-video-to-linkedin", "Turn YouTube videos into LinkedIn thought-leadership posts. One video, one click—professional tone and length without manual reformatting."),
    ("blog-post-to-twitter", "Turn blog posts into Twitter threads that drive traffic. One post, one click—hook, key points, and CTA without manual slicing."),
    ("blog-post-to-linkedin", "Turn blog posts into LinkedIn posts that perform. One post, one click—thought-leadership tone and format without rewriting."),
    ("twitter-thread-to-linkedin", "Turn Twitter threads into LinkedIn posts that don't feel like cross-posts. One thread, one click—professional structure and length."),
    ("newsletter-to-twitter", "Turn newsletter editions into tweets and threads. One edition, one click—shareable bits without copy-pasting the whole email."),
    ("changelog-to-twitter", "Turn changelogs into Twitter threads that ship the update. One changelog, one click—founder voice, not press release."),
    ("podcast-to-reddit", "Turn podcast episodes into Reddit posts that start real discussions. One episode, one click—the insight without the ad read."),
    ("podcast-to-linkedin", "Turn podcast episodes into LinkedIn posts people actually finish. One episode, one click—the best takeaway, shaped for the feed."),
];

pub const INTRO_GENERIC: &str = "One {source_lc}, many formats. Paste once; get {target_lc}-native content in one click. No manual reformatting—we handle length, tone, and platform norms.";
pub const INTRO_CURATED_PERSONA_SUFFIX: &str = " Built for {persona_lc} who ship weekly.";
pub const INTRO_GENERIC_PERSONA_SUFFIX: &str = " Built for {persona_lc}.";

/// Combination-specific problem/solution/example blocks. Used verbatim.
#[derive(Debug, Clone, Copy)]
pub struct ComboCopy {
    pub why_manual_fails: &'static str,
    pub how_we_solve: &'static str,
    pub example_snippet: &'static str,
}

pub static COMBO_COPY: &[(&str, ComboCopy)] = &[
    ("youtube-video-to-reddit", ComboCopy {
        why_manual_fails: "YouTube videos have to be transcribed or summarized before you can turn them into Reddit posts—and Reddit demands value-first tone, sub norms, and no corporate speak. Most founders either skip Reddit or paste the same promo everywhere, which gets downvoted.",
        how_we_solve: "Paste your YouTube URL or transcript. We turn it into Reddit-ready posts: value-first tone, sub-appropriate length, and no marketing speak. Voice Lock keeps your voice so it doesn't sound like a bot. One video, one click.",
        example_snippet: "Example: A 10-minute product walkthrough becomes a Reddit post that shares the insight without sounding like an ad—fits r/SaaS or r/startups instead of getting removed.",
    }),
    ("youtube-video-to-blog", ComboCopy {
        why_manual_fails: "Turning a YouTube video into a blog post means transcribing, structuring, and adding depth—most founders don't have time. The result is either a thin summary or a wall of text that doesn't rank.",
        how_we_solve: "Paste your YouTube URL or transcript. We generate a blog-ready piece: intro, sections, and conclusion with SEO-friendly structure. Voice Lock keeps your tone. One video, one click—long-form content without manual writing.",
        example_snippet: "Example: A tutorial video becomes a 1,500-word blog post with H2/H3 structure, key takeaways, and a CTA—ready to publish and rank.",
    }),
    ("youtube-video-to-twitter", ComboCopy {
        why_manual_fails: "YouTube videos are long—turning them into a thread means rewatching, pulling quotes, and fitting character limits. Most founders either skip Twitter or post one generic tweet and miss the thread opportunity.",
        how_we_solve: "Paste your YouTube URL or transcript. We extract key points and turn them into a thread with a strong hook and clear structure. Voice Lock keeps your voice. One video, one click.",
        example_snippet: "Example: A 15-minute update becomes a 5-tweet thread that hooks in the first line and drives clicks to the video—no manual slicing.",
    }),
    ("blog-post-to-twitter", ComboCopy {
        why_manual_fails: "Blog posts are long—turning them into a thread means picking angles, compressing, and fitting character limits. Most founders either post one link tweet (low engagement) or spend an hour rewriting.",
        how_we_solve: "Paste your blog URL or copy. We generate a thread with hook, key points, and CTA. Voice Lock keeps your tone. One post, one click—thread-ready without manual slicing.",
        example_snippet: "Example: A 1,200-word post becomes a 6-tweet thread that drives traffic—hook in tweet 1, key insight in the middle, CTA at the end.",
    }),
    ("podcast-to-reddit", ComboCopy {
        why_manual_fails: "Podcast episodes bury the one insight a subreddit cares about under an hour of conversation. Transcribing, finding that moment, and rewriting it without the promo tone takes longer than recording the episode.",
        how_we_solve: "Paste your transcript or episode URL. We pull the strongest insight and turn it into a value-first Reddit post with sub-appropriate length and no ad-read tone. Voice Lock keeps it sounding like you.",
        example_snippet: "Example: A 45-minute interview becomes a Reddit post on one concrete lesson, with context and a question that invites replies instead of downvotes.",
    }),
];

/// Hand-written tips for key combinations.
pub static COMBO_TIPS: &[(&str, [&str; 3])] = &[
    ("youtube-video-to-twitter", [
        "Paste the video URL or transcript—we extract key points and turn them into a thread with a strong hook.",
        "Use the first 2–3 takeaways for the thread; save deeper points for LinkedIn or email.",
        "Keep your voice: add 5–10 sample tweets in Voice Lock so the thread sounds like you.",
    ]),
    ("blog-post-to-twitter", [
        "Paste the blog URL or copy; we generate a thread with hook, key points, and CTA.",
        "One blog can become multiple threads (different angles); start with the strongest angle.",
        "Voice Lock keeps your tone so the thread doesn't sound like generic AI.",
    ]),
    ("tweet-to-linkedin", [
        "Paste your best tweet; we expand it into a LinkedIn post with structure and professional tone.",
        "One tweet can inspire 2–3 LinkedIn posts (different hooks); repurpose the same idea without repeating.",
        "Add line breaks and a clear CTA so it reads natively on LinkedIn.",
    ]),
    ("twitter-thread-to-linkedin", [
        "Paste the full thread; we turn it into one cohesive LinkedIn post, not a copy-paste.",
        "We keep the narrative flow and adjust length and tone for a professional audience.",
        "Voice Lock ensures your build-in-public voice carries over to LinkedIn.",
    ]),
    ("newsletter-to-twitter", [
        "Paste the newsletter URL or text; we slice the best bits into tweets or a thread.",
        "Lead with the most shareable insight or story; save the rest for other platforms.",
        "One edition can fuel a week of tweets—batch and schedule.",
    ]),
    ("changelog-to-twitter", [
        "Paste your changelog; we turn it into a thread that ships the update without sounding like a press release.",
        "Lead with the user benefit, not the feature name; keep it founder-voice, not corporate.",
        "Use Voice Lock so your product updates sound consistent with your other content.",
    ]),
];

pub static GENERIC_TIPS: [&str; 3] = [
    "Paste your {source} (or URL if applicable); we generate {target}-native content in one click.",
    "We match length, tone, and format to {target} so it doesn't look like a cross-post.",
    "Use Voice Lock with 5–10 sample posts so output sounds like you.",
];

pub const PERSONA_TIP: &str = "{persona}: we tune tone and examples for your audience.";

/// "What you get" paragraph per target, plus the sentence appended on persona pages.
#[derive(Debug, Clone, Copy)]
pub struct WhatYouGet {
    pub body: &'static str,
    pub persona_suffix: &'static str,
}

pub static WHAT_YOU_GET: &[(&str, WhatYouGet)] = &[
    ("twitter", WhatYouGet {
        body: "One {source_lc} becomes a Twitter thread (or multiple tweets) with a strong hook, clear structure, and the right length. No manual slicing—paste once, get platform-native output.",
        persona_suffix: " Built for {persona_lc} who ship weekly.",
    }),
    ("linkedin", WhatYouGet {
        body: "One {source_lc} becomes a LinkedIn post with thought-leadership tone, proper length, and formatting that works in the feed. Not a cross-post—native structure and CTA.",
        persona_suffix: " Voice Lock keeps your {persona_lc} voice.",
    }),
    ("reddit", WhatYouGet {
        body: "One {source_lc} becomes a Reddit-ready post: value-first tone, sub-appropriate length, and no corporate speak. Fits the community instead of sounding like marketing.",
        persona_suffix: " Tuned for {persona_lc} who share in relevant subs.",
    }),
    ("email", WhatYouGet {
        body: "One {source_lc} becomes email-ready: subject line, scannable body, and CTA. Fits your list's tone and length.",
        persona_suffix: " Ideal for {persona_lc} newsletters.",
    }),
    ("youtube-shorts", WhatYouGet {
        body: "One {source_lc} becomes a Shorts-style script or captions: hook in the first seconds, tight narrative, vertical-friendly.",
        persona_suffix: " For {persona_lc} who repurpose to Shorts.",
    }),
    ("blog", WhatYouGet {
        body: "One {source_lc} becomes a blog-ready piece: structure, depth, and SEO-friendly flow. Not just a stretched social post—full narrative.",
        persona_suffix: " For {persona_lc} content batching.",
    }),
    ("tiktok", WhatYouGet {
        body: "One {source_lc} becomes TikTok-ready: hook in the first second, vertical pacing, captions that work without sound. Native short-form, not a cut-down long video.",
        persona_suffix: " Built for {persona_lc}.",
    }),
    ("instagram", WhatYouGet {
        body: "One {source_lc} becomes Instagram-ready: feed caption or Reels script with the right length and structure. Carousel narrative or short-form that fits Explore.",
        persona_suffix: " For {persona_lc} who repurpose to Instagram.",
    }),
    ("threads", WhatYouGet {
        body: "One {source_lc} becomes Threads-ready: conversational tone, feed-friendly length, and CTA that drives engagement. Native to the Threads audience.",
        persona_suffix: " For {persona_lc}.",
    }),
];

pub const WHAT_YOU_GET_GENERIC: WhatYouGet = WhatYouGet {
    body: "One {source_lc} becomes {target_lc}-native content: right length, tone, and format. Paste once, get output you can publish.",
    persona_suffix: " Built for {persona_lc}.",
};

pub const TIER1_H1: &str = "Turn your {source} into {target} content";
pub const TIER1_TITLE: &str = "{source} to {target} | Silho AI";
pub const TIER1_DESCRIPTION: &str = "{source} to {target}: paste once, get platform-native {target} output. No manual reformatting. Built for founders and indie hackers.";
pub const TIER1_WHY: &str = "Reformatting {source} for {target} takes time: different lengths, tone, and formatting rules. Most founders skip it or post the same copy everywhere.";
pub const TIER1_HOW: &str = "Paste your {source} (or paste a URL for blogs/newsletters). Select {target}. We generate platform-native content in one click. Optionally lock your voice with 5–10 sample posts.";
pub const TIER1_EXAMPLE: &str = "Example: A 500-word blog becomes a {format} with the right length and format.";
pub const TIER1_BEST_FOR: &str = "Founders and indie hackers building in public.";

/// Output format named in the generic Tier 1 example, by target.
pub static EXAMPLE_FORMATS: &[(&str, &str)] = &[
    ("twitter", "thread of tweets"),
    ("linkedin", "thought-leadership post"),
];
pub const EXAMPLE_FORMAT_GENERIC: &str = "native {target} post";

/// Tier 2 copy for one persona. Combination copy still wins over the
/// problem/solution/example fields.
#[derive(Debug, Clone, Copy)]
pub struct PersonaCopy {
    pub persona: &'static str,
    pub description: &'static str,
    pub why_manual_fails: &'static str,
    pub how_we_solve: &'static str,
    pub example_twitter: &'static str,
    pub example_linkedin: &'static str,
    pub example_reddit: &'static str,
    pub example_other: &'static str,
    pub best_for: &'static str,
}

pub const TIER2_H1: &str = "Turn your {source} into {target} content — for {persona_lc}";
pub const TIER2_TITLE: &str = "{source} to {target} for {persona_lc} | Silho AI";

pub static PERSONA_COPY: &[PersonaCopy] = &[
    PersonaCopy {
        persona: "founders",
        description: "Founders: turn your {source_lc} into {target} content without a content team. One weekly update or changelog becomes platform-native {target} output. Paste once, ship everywhere.",
        why_manual_fails: "Founders already write weekly updates, changelogs, and launch notes—but reformatting that same content for {target} (length, tone, format) eats time you don't have. Most end up posting the same copy everywhere or skipping channels entirely.",
        how_we_solve: "Paste your {source} (or a URL for blogs/newsletters). We turn it into {target}-native content in one click. Voice Lock uses 5–10 of your existing posts so outputs sound like you, not generic AI. Built for solo founders who ship weekly.",
        example_twitter: "Example: Your product changelog becomes a thread that ships the update without sounding like a press release.",
        example_linkedin: "Example: Your founder update becomes a thought-leadership post with the right length and professional tone for LinkedIn.",
        example_reddit: "Example: Your launch note becomes a value-first Reddit post that fits the sub's norms instead of sounding like marketing.",
        example_other: "Example: One {source} becomes a {target}-ready piece with the right format and length.",
        best_for: "Solo founders shipping weekly updates, changelogs, or launch notes who want distribution without a content team.",
    },
    PersonaCopy {
        persona: "indie-hackers",
        description: "Indie hackers: repurpose your {source_lc} into {target} in one click. Build in public once, get platform-native {target} output. No manual reformatting—ship to every channel.",
        why_manual_fails: "Indie hackers ship fast and build in public, but rewriting the same thread or blog for {target} (character limits, tone, community norms) takes time you'd rather spend building. Result: one channel gets love, the rest get copy-paste or silence.",
        how_we_solve: "Paste your {source}—thread, blog, or newsletter. We generate {target}-native content in one click. Voice Lock keeps your build-in-public voice so you don't sound like a bot. Built for solo builders who want one piece to feed X, LinkedIn, Reddit, and more.",
        example_twitter: "Example: Your build-in-public thread becomes a proper thread (or multiple tweets) with the right hook and length for X.",
        example_linkedin: "Example: Your thread or ship log becomes a LinkedIn post that doesn't feel like a cross-post—right length, professional tone.",
        example_reddit: "Example: Your update becomes a Reddit post that adds value and fits the sub instead of sounding like self-promo.",
        example_other: "Example: One {source} becomes a {target} post that fits the platform instead of a generic paste.",
        best_for: "Indie hackers building in public who want one piece of content to drive X, LinkedIn, Reddit, and email without rewriting by hand.",
    },
    PersonaCopy {
        persona: "content-creators",
        description: "Content creators: turn every {source_lc} into {target} content that fits the feed. Publish once, get platform-native {target} output and keep your audience growing on every channel.",
        why_manual_fails: "Creators already publish on a schedule—but cutting each {source_lc} down for {target} (hooks, pacing, captions) doubles the work behind every release. Most creators either let the piece live on one platform or post a lazy cross-post that underperforms.",
        how_we_solve: "Paste your {source} or its URL. We generate {target}-native content in one click, with hooks and length tuned to the platform. Voice Lock keeps your on-camera and on-page voice consistent. Built for creators who publish more than they can manually reformat.",
        example_twitter: "Example: Your latest video script becomes a thread that teases the best moment and sends followers back to the full piece.",
        example_linkedin: "Example: Your behind-the-scenes story becomes a LinkedIn post that lands with brands and collaborators, not just fans.",
        example_reddit: "Example: Your tutorial becomes a Reddit post that answers the sub's real question and earns the click.",
        example_other: "Example: One {source} becomes a {target} piece your audience would never guess was repurposed.",
        best_for: "Content creators publishing weekly who want every piece to reach every platform they care about.",
    },
    PersonaCopy {
        persona: "marketers",
        description: "Marketers: repurpose your {source_lc} into {target} content in one click. One campaign asset becomes platform-native {target} output that stays on message.",
        why_manual_fails: "Marketing teams produce a {source_lc} and then spend days adapting it for {target}: new hooks, new length, new approvals. Channels go quiet while copy waits in review, or the same asset gets pasted everywhere and underperforms.",
        how_we_solve: "Paste your {source} or campaign URL. We produce {target}-native drafts in one click that keep the campaign message intact. Voice Lock locks in your brand voice so every channel sounds like the same company. Built for lean marketing teams.",
        example_twitter: "Example: A campaign landing page becomes a launch thread that pulls the strongest claim into tweet one.",
        example_linkedin: "Example: A product marketing brief becomes a LinkedIn post your sales team is happy to share.",
        example_reddit: "Example: A feature announcement becomes a Reddit post that leads with the problem solved, not the product name.",
        example_other: "Example: One {source} becomes a {target} asset that stays on brief without another round of edits.",
        best_for: "Lean marketing teams who need one asset to fuel every channel without another copywriting sprint.",
    },
    PersonaCopy {
        persona: "coaches",
        description: "Coaches and consultants: turn your {source_lc} into {target} content that builds authority. One session or article becomes platform-native {target} output that brings in clients.",
        why_manual_fails: "Coaches and consultants create deep material—sessions, frameworks, articles—but reshaping a {source_lc} for {target} takes hours you'd rather bill. The expertise stays locked in one place and the pipeline depends on referrals.",
        how_we_solve: "Paste your {source} or a link to it. We turn it into {target}-native content in one click that keeps your frameworks and examples intact. Voice Lock keeps your advisory tone. Built for experts who want authority content without a ghostwriter.",
        example_twitter: "Example: A client framework becomes a thread that walks through each step and invites a discovery call.",
        example_linkedin: "Example: A workshop recap becomes a LinkedIn post that shows your method and attracts the right clients.",
        example_reddit: "Example: A coaching insight becomes a Reddit answer that helps first and mentions your work only when it fits.",
        example_other: "Example: One {source} becomes a {target} piece that shows your expertise without giving away the whole engagement.",
        best_for: "Coaches and consultants who want steady authority content that brings in clients without a ghostwriter.",
    },
    PersonaCopy {
        persona: "agencies",
        description: "Agencies and freelancers: repurpose each client {source_lc} into {target} content in one click. Deliver platform-native {target} output for every account without adding headcount.",
        why_manual_fails: "Agencies and freelancers adapt every client {source_lc} for {target} by hand, account after account. Each client has its own voice and each platform its own rules, so margins shrink as the roster grows.",
        how_we_solve: "Paste the client's {source} or URL. We generate {target}-native drafts in one click. Voice Lock stores a voice per client so deliverables sound like the brand, not like your team. Built for agencies and freelancers who bill for outcomes, not hours of reformatting.",
        example_twitter: "Example: A client's blog post becomes a ready-to-approve thread in the client's own voice.",
        example_linkedin: "Example: A client's case study becomes a LinkedIn post their founder can publish as-is.",
        example_reddit: "Example: A client's launch becomes a Reddit post that respects the sub's rules and the client's brand.",
        example_other: "Example: One client {source} becomes a {target} deliverable that is ready for approval.",
        best_for: "Agencies and freelancers managing content for multiple clients who need platform-native deliverables at scale.",
    },
];

pub fn persona_copy(persona: &str) -> Option<&'static PersonaCopy> {
    PERSONA_COPY.iter().find(|c| c.persona == persona)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseo::axes::{PERSONAS, SOURCES, TARGETS};

    #[test]
    fn every_axis_value_has_its_tables() {
        for source in SOURCES.iter() {
            assert!(crate::pseo::copy::lookup(SOURCE_PAINS, source.slug).is_some(), "{}", source.slug);
        }
        for target in TARGETS.iter() {
            assert!(crate::pseo::copy::lookup(TARGET_NEEDS, target.slug).is_some(), "{}", target.slug);
            assert!(crate::pseo::copy::lookup(WHAT_YOU_GET, target.slug).is_some(), "{}", target.slug);
        }
        for persona in PERSONAS.iter() {
            assert!(persona_copy(persona.slug).is_some(), "{}", persona.slug);
        }
    }

    #[test]
    fn combination_keys_name_real_axis_values() {
        let keys = INTROS
            .iter()
            .map(|(k, _)| *k)
            .chain(COMBO_COPY.iter().map(|(k, _)| *k))
            .chain(COMBO_TIPS.iter().map(|(k, _)| *k));
        for key in keys {
            let (source, target) = key.split_once("-to-").unwrap();
            assert!(crate::pseo::axes::source(source).is_some(), "{key}");
            assert!(crate::pseo::axes::target(target).is_some(), "{key}");
        }
    }
}
