//! Page builders. Every builder is total: given axis values it always returns
//! a complete page, substituting defaults for missing table entries.

use crate::model::{AxisValue, RepurposePage, RepurposeTier, Tier3Page, Tier4Page};
use crate::pseo::axes::{DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::pseo::copy::outcome::{self, OutcomeCopy};
use crate::pseo::copy::repurpose as rc;
use crate::pseo::copy::tier3 as t3;
use crate::pseo::copy::{fill, lookup};
use crate::pseo::faq;
use crate::pseo::slug::{OutcomeKey, RepurposeKey, Tier3Key};

/// h1 of the founders/build-in-public Tier 3 page. A Tier 1/2 page carrying
/// this h1 has no real content of its own.
pub const GENERIC_TIER3_H1: &str = "Content repurposing for founders building in public";

const FALLBACK_DESCRIPTION: &str = "Repurpose your content in one click. Paste once, get platform-native output. Built for founders and indie hackers.";
const FALLBACK_INTRO: &str = "One piece of content, many formats. Paste once; get platform-native output for Twitter, LinkedIn, Reddit, email, and more. No manual reformatting—we handle length, tone, and platform norms.";
const FALLBACK_WHY: &str = "Reformatting content for different platforms takes time: different lengths, tone, and formatting rules. Most founders skip it or post the same copy everywhere.";
const FALLBACK_HOW: &str = "Paste your content (or a URL for blogs/newsletters). Select your target platform. We generate platform-native content in one click. Optionally lock your voice with 5–10 sample posts.";
const FALLBACK_EXAMPLE: &str = "Example: One piece of content becomes a thread, post, or email with the right length and format for each platform.";

/// Dashes to spaces, e.g. `content-batching` -> `content batching`.
pub fn humanize(slug: &str) -> String {
    slug.replace('-', " ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

struct Labels {
    source: &'static str,
    source_lc: String,
    target: &'static str,
    target_lc: String,
    persona: &'static str,
    persona_lc: String,
}

impl Labels {
    fn new(source: &AxisValue, target: &AxisValue, persona: Option<&AxisValue>) -> Self {
        Self {
            source: source.label,
            source_lc: source.label_lower(),
            target: target.label,
            target_lc: target.label_lower(),
            persona: persona.map(|p| p.label).unwrap_or_default(),
            persona_lc: persona.map(|p| p.label_lower()).unwrap_or_default(),
        }
    }

    fn vars(&self) -> [(&str, &str); 6] {
        [
            ("source", self.source),
            ("source_lc", &self.source_lc),
            ("target", self.target),
            ("target_lc", &self.target_lc),
            ("persona", self.persona),
            ("persona_lc", &self.persona_lc),
        ]
    }
}

/// First two pains of the source plus the target's primary need.
pub fn pain_points(source: &AxisValue, target: &AxisValue) -> Vec<String> {
    let pains = lookup(rc::SOURCE_PAINS, source.slug)
        .or_else(|| lookup(rc::SOURCE_PAINS, DEFAULT_SOURCE.slug))
        .map(|p| &p[..])
        .unwrap_or_default();
    let needs = lookup(rc::TARGET_NEEDS, target.slug)
        .or_else(|| lookup(rc::TARGET_NEEDS, DEFAULT_TARGET.slug))
        .map(|n| &n[..])
        .unwrap_or_default();
    let need = needs
        .first()
        .map(|n| n.to_lowercase())
        .unwrap_or_else(|| "platform-native format and tone.".to_string());

    let mut points: Vec<String> = pains.iter().take(2).map(|p| p.to_string()).collect();
    points.push(fill(rc::PAIN_POINT_NEED, &[("target", target.label), ("need", &need)]));
    points
}

pub fn intro(source: &AxisValue, target: &AxisValue, persona: Option<&AxisValue>) -> String {
    let labels = Labels::new(source, target, persona);
    let vars = labels.vars();
    let combo = format!("{}-to-{}", source.slug, target.slug);
    let (base, suffix) = match lookup(rc::INTROS, &combo) {
        Some(curated) => (curated.to_string(), rc::INTRO_CURATED_PERSONA_SUFFIX),
        None => (fill(rc::INTRO_GENERIC, &vars), rc::INTRO_GENERIC_PERSONA_SUFFIX),
    };
    match persona {
        Some(_) => base + &fill(suffix, &vars),
        None => base,
    }
}

pub fn tips(source: &AxisValue, target: &AxisValue, persona: Option<&AxisValue>) -> Vec<String> {
    let labels = Labels::new(source, target, persona);
    let vars = labels.vars();
    let combo = format!("{}-to-{}", source.slug, target.slug);
    match lookup(rc::COMBO_TIPS, &combo) {
        Some(tips) => {
            let mut out: Vec<String> = tips.iter().map(|t| t.to_string()).collect();
            if persona.is_some() {
                out.push(fill(rc::PERSONA_TIP, &vars));
            }
            out
        }
        None => rc::GENERIC_TIPS.iter().map(|t| fill(t, &vars)).collect(),
    }
}

pub fn what_you_get(source: &AxisValue, target: &AxisValue, persona: Option<&AxisValue>) -> String {
    let labels = Labels::new(source, target, persona);
    let vars = labels.vars();
    let block = lookup(rc::WHAT_YOU_GET, target.slug).unwrap_or(&rc::WHAT_YOU_GET_GENERIC);
    let mut out = fill(block.body, &vars);
    if persona.is_some() {
        out.push_str(&fill(block.persona_suffix, &vars));
    }
    out
}

fn example_for_target(copy: &rc::PersonaCopy, target: &AxisValue) -> &'static str {
    match target.slug {
        "twitter" => copy.example_twitter,
        "linkedin" => copy.example_linkedin,
        "reddit" => copy.example_reddit,
        _ => copy.example_other,
    }
}

/// Tier 1 page when `key.persona` is `None`, Tier 2 otherwise.
pub fn repurpose_page(key: &RepurposeKey) -> RepurposePage {
    let RepurposeKey {
        source,
        target,
        persona,
    } = *key;
    let labels = Labels::new(&source, &target, persona.as_ref());
    let vars = labels.vars();
    let combo = lookup(rc::COMBO_COPY, &key.combo());
    let persona_copy = persona.and_then(|p| rc::persona_copy(p.slug));

    let (tier, h1, title, description, why, how, example, best_for) = match persona_copy {
        Some(pc) => (
            RepurposeTier::SourceToTargetForPersona,
            fill(rc::TIER2_H1, &vars),
            fill(rc::TIER2_TITLE, &vars),
            fill(pc.description, &vars),
            fill(pc.why_manual_fails, &vars),
            fill(pc.how_we_solve, &vars),
            fill(example_for_target(pc, &target), &vars),
            pc.best_for.to_string(),
        ),
        None => {
            let format = lookup(rc::EXAMPLE_FORMATS, target.slug)
                .map(|f| f.to_string())
                .unwrap_or_else(|| fill(rc::EXAMPLE_FORMAT_GENERIC, &vars));
            (
                RepurposeTier::SourceToTarget,
                fill(rc::TIER1_H1, &vars),
                fill(rc::TIER1_TITLE, &vars),
                fill(rc::TIER1_DESCRIPTION, &vars),
                fill(rc::TIER1_WHY, &vars),
                fill(rc::TIER1_HOW, &vars),
                fill(rc::TIER1_EXAMPLE, &[("format", &format)]),
                rc::TIER1_BEST_FOR.to_string(),
            )
        }
    };

    RepurposePage {
        slug: key.slug(),
        tier,
        source: source.slug.to_string(),
        source_label: source.label.to_string(),
        target: target.slug.to_string(),
        target_label: target.label.to_string(),
        persona: persona.map(|p| p.slug.to_string()),
        persona_label: persona.map(|p| p.label.to_string()),
        title,
        description,
        intro: intro(&source, &target, persona.as_ref()),
        h1,
        why_manual_fails: combo.map(|c| c.why_manual_fails.to_string()).unwrap_or(why),
        how_we_solve: combo.map(|c| c.how_we_solve.to_string()).unwrap_or(how),
        example_snippet: combo.map(|c| c.example_snippet.to_string()).unwrap_or(example),
        best_for,
        pain_points: pain_points(&source, &target),
        tips: tips(&source, &target, persona.as_ref()),
        what_you_get: what_you_get(&source, &target, persona.as_ref()),
        faqs: faq::repurpose_faqs(&source, &target, persona.as_ref()),
    }
}

/// Generic page for a slug outside the repurpose grammar. Only the title and
/// h1 depend on the input.
pub fn repurpose_fallback(slug: &str) -> RepurposePage {
    let human = humanize(slug.strip_prefix("repurpose-").unwrap_or(slug));
    let (source, target) = (DEFAULT_SOURCE, DEFAULT_TARGET);
    RepurposePage {
        slug: slug.to_string(),
        tier: RepurposeTier::SourceToTarget,
        source: source.slug.to_string(),
        source_label: source.label.to_string(),
        target: target.slug.to_string(),
        target_label: target.label.to_string(),
        persona: None,
        persona_label: None,
        title: format!("{human} | Silho AI"),
        description: FALLBACK_DESCRIPTION.to_string(),
        intro: FALLBACK_INTRO.to_string(),
        h1: format!("Repurpose: {human}"),
        why_manual_fails: FALLBACK_WHY.to_string(),
        how_we_solve: FALLBACK_HOW.to_string(),
        example_snippet: FALLBACK_EXAMPLE.to_string(),
        best_for: rc::TIER1_BEST_FOR.to_string(),
        pain_points: pain_points(&source, &target),
        tips: tips(&source, &target, None),
        what_you_get: what_you_get(&source, &target, None),
        faqs: faq::repurpose_faqs(&source, &target, None),
    }
}

pub fn tier3_page(key: &Tier3Key) -> Tier3Page {
    let Tier3Key { persona, use_case } = *key;
    let persona_lc = persona.label_lower();
    let use_case_lc = use_case.label_lower();
    let vars = [
        ("persona", persona.label),
        ("persona_lc", persona_lc.as_str()),
        ("use_case", use_case.label),
        ("use_case_lc", use_case_lc.as_str()),
    ];
    let copy = t3::tier3_copy(persona.slug, use_case.slug);

    Tier3Page {
        persona: persona.slug.to_string(),
        persona_label: persona.label.to_string(),
        use_case: use_case.slug.to_string(),
        use_case_label: use_case.label.to_string(),
        title: fill(t3::TITLE, &vars),
        description: fill(t3::DESCRIPTION, &vars),
        h1: copy.map(|c| c.h1.to_string()).unwrap_or_else(|| fill(t3::FALLBACK_H1, &vars)),
        body: copy.map(|c| c.body.to_string()).unwrap_or_else(|| fill(t3::FALLBACK_BODY, &vars)),
        cta: copy.map(|c| c.cta).unwrap_or(t3::FALLBACK_CTA).to_string(),
        problem_paragraph: copy
            .map(|c| c.problem.to_string())
            .unwrap_or_else(|| fill(t3::FALLBACK_PROBLEM, &vars)),
        solution_paragraph: copy
            .map(|c| c.solution.to_string())
            .unwrap_or_else(|| fill(t3::FALLBACK_SOLUTION, &vars)),
        how_it_works_paragraph: copy
            .map(|c| c.how_it_works)
            .unwrap_or(t3::FALLBACK_HOW_IT_WORKS)
            .to_string(),
        faqs: faq::tier3_faqs(persona.label, use_case.slug),
    }
}

/// Page for a persona/use-case pair outside the catalog. Labels are the
/// humanised slugs.
pub fn tier3_fallback(persona: &str, use_case: &str) -> Tier3Page {
    let persona_h = humanize(persona);
    let use_case_h = humanize(use_case);
    let vars = [
        ("persona", persona_h.as_str()),
        ("persona_lc", persona_h.as_str()),
        ("use_case", use_case_h.as_str()),
        ("use_case_lc", use_case_h.as_str()),
    ];
    Tier3Page {
        persona: persona.to_string(),
        persona_label: capitalize(&persona_h),
        use_case: use_case.to_string(),
        use_case_label: capitalize(&use_case_h),
        title: fill(t3::TITLE, &vars),
        description: fill(t3::DESCRIPTION, &vars),
        h1: fill(t3::FALLBACK_H1, &vars),
        body: fill(t3::UNKNOWN_BODY, &vars),
        cta: t3::FALLBACK_CTA.to_string(),
        problem_paragraph: fill(t3::FALLBACK_PROBLEM, &vars),
        solution_paragraph: fill(t3::FALLBACK_SOLUTION, &vars),
        how_it_works_paragraph: t3::FALLBACK_HOW_IT_WORKS.to_string(),
        faqs: faq::tier3_faqs(&persona_h, use_case),
    }
}

/// Page for a hand-written outcome entry.
pub fn curated_outcome_page(copy: &OutcomeCopy) -> Tier4Page {
    Tier4Page {
        slug: copy.slug.to_string(),
        source: copy.source.to_string(),
        source_label: copy.source_label.to_string(),
        target: copy.target.to_string(),
        target_label: copy.target_label.to_string(),
        count: copy.count,
        title: copy.title.to_string(),
        description: copy.description.to_string(),
        h1: copy.h1.to_string(),
        body: copy.body.to_string(),
        cta: copy.cta.to_string(),
        faqs: faq::tier4_faqs(copy.source_label, copy.target_label, copy.count),
    }
}

/// Outcome page for a parsed slug. Curated copy for the same slug wins.
pub fn outcome_page(key: &OutcomeKey) -> Tier4Page {
    let slug = key.slug();
    if let Some(copy) = outcome::curated(&slug) {
        return curated_outcome_page(copy);
    }
    let OutcomeKey {
        source,
        target,
        count,
    } = *key;
    let source_lc = source.label_lower();
    let target_lc = target.label_lower();
    let count_s = count.to_string();
    let vars = [
        ("source", source.label),
        ("source_lc", source_lc.as_str()),
        ("target", target.label),
        ("target_lc", target_lc.as_str()),
        ("count", count_s.as_str()),
    ];
    let h1 = fill(outcome::H1, &vars);
    let cta = if count == 1 {
        fill(outcome::CTA_SINGLE, &vars)
    } else {
        fill(outcome::CTA_MANY, &vars)
    };
    Tier4Page {
        slug,
        source: source.slug.to_string(),
        source_label: source.label.to_string(),
        target: target.slug.to_string(),
        target_label: target.label.to_string(),
        count,
        title: format!("{h1} | Silho AI"),
        description: fill(outcome::DESCRIPTION, &vars),
        h1,
        body: fill(outcome::BODY, &vars),
        cta,
        faqs: faq::tier4_faqs(source.label, target.label, count),
    }
}

pub fn outcome_fallback(slug: &str) -> Tier4Page {
    let human = humanize(slug);
    Tier4Page {
        slug: slug.to_string(),
        source: DEFAULT_SOURCE.slug.to_string(),
        source_label: DEFAULT_SOURCE.label.to_string(),
        target: DEFAULT_TARGET.slug.to_string(),
        target_label: DEFAULT_TARGET.label.to_string(),
        count: outcome::FALLBACK_COUNT,
        title: fill(outcome::FALLBACK_TITLE, &[("human", &human)]),
        description: outcome::FALLBACK_DESCRIPTION.to_string(),
        h1: outcome::FALLBACK_H1.to_string(),
        body: outcome::FALLBACK_BODY.to_string(),
        cta: outcome::FALLBACK_CTA.to_string(),
        faqs: faq::tier4_faqs(DEFAULT_SOURCE.label, DEFAULT_TARGET.label, outcome::FALLBACK_COUNT),
    }
}
