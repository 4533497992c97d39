//! Static landing-page copy. Field names are the documentation.
#![allow(missing_docs)]

use crate::{foundation::color::Rgba8, video::theme};

/// An in-page or external link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    /// Visible text.
    pub label: &'static str,
    /// Target, `#anchor` for in-page sections.
    pub href: &'static str,
}

impl Link {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// `true` for links that scroll within the page.
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#') && self.href.len() > 1
    }
}

/// Brand word mark, the first part drawn in the accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Brand {
    /// Accent part of the word mark.
    pub accent: &'static str,
    /// Plain remainder.
    pub rest: &'static str,
}

impl Brand {
    /// Full brand name.
    pub fn name(&self) -> String {
        format!("{}{}", self.accent, self.rest)
    }
}

/// Top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Nav {
    /// Word mark, linking to the top of the page.
    pub brand: Brand,
    /// Section links.
    pub links: &'static [Link],
    /// Highlighted call to action.
    pub cta: Link,
}

/// Embedded looping demo video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DemoEmbed {
    /// Video file.
    pub src: &'static str,
    /// Poster image.
    pub poster: &'static str,
    /// Fake window title above the player.
    pub caption: &'static str,
}

/// Hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub subhead: &'static str,
    /// Main button.
    pub primary: Link,
    /// Secondary outline button.
    pub secondary: Link,
    /// Small print under the buttons.
    pub reassurance: &'static str,
    pub demo: DemoEmbed,
}

/// One "how it works" step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Step {
    /// 1-based step number.
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Colour tier of a score badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// `>= 80`.
    Success,
    /// `>= 50`.
    Warning,
    /// Below 50.
    Danger,
}

impl ScoreTier {
    /// Tier for a 0-100 score.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Success
        } else if score >= 50.0 {
            Self::Warning
        } else {
            Self::Danger
        }
    }

    /// Badge text colour.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Success => theme::SUCCESS,
            Self::Warning => theme::WARNING,
            Self::Danger => theme::DANGER,
        }
    }

    /// Badge fill: the text colour at 15% alpha.
    pub fn background(self) -> Rgba8 {
        self.color().with_alpha(38)
    }
}

/// A score badge as displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ScoreBadge {
    /// Displayed integer value.
    pub value: u32,
    pub tier: ScoreTier,
}

impl ScoreBadge {
    /// Badge for `score`, rounded half away from zero.
    pub fn new(score: f64) -> Self {
        Self {
            value: score.round().max(0.0) as u32,
            tier: ScoreTier::for_score(score),
        }
    }
}

/// One row of the sample report table.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ReportRow {
    /// 1-based rank.
    pub rank: u8,
    pub model: &'static str,
    pub provider: &'static str,
    /// Accuracy out of 100.
    pub accuracy: u8,
    /// Response time label.
    pub speed: &'static str,
    /// Cost per query label.
    pub cost: &'static str,
    /// Composite score.
    pub score: f64,
    /// Recommended model, drawn with a trophy instead of the rank.
    pub winner: bool,
}

impl ReportRow {
    /// Accuracy column badge.
    pub fn accuracy_badge(&self) -> ScoreBadge {
        ScoreBadge::new(f64::from(self.accuracy))
    }

    /// Score column badge.
    pub fn score_badge(&self) -> ScoreBadge {
        ScoreBadge::new(self.score)
    }
}

/// Highlighted recommendation above the report table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Recommendation {
    pub model: &'static str,
    /// Metric chips (accuracy, latency, cost).
    pub metrics: [&'static str; 3],
    pub rationale: &'static str,
    pub savings: &'static str,
}

/// "See a real report" section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampleReport {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub recommendation: Recommendation,
    /// Rows in rank order.
    pub rows: &'static [ReportRow],
    /// Note under the table.
    pub footnote: &'static str,
}

/// Feature card or trust signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

/// Providers and model names covered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Coverage {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub providers: &'static [&'static str],
    pub models: &'static [&'static str],
}

/// The single pricing plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Pricing {
    pub heading: &'static str,
    pub subheading: &'static str,
    /// Plan name.
    pub plan: &'static str,
    pub price: &'static str,
    /// Billing unit under the price.
    pub unit: &'static str,
    /// Ticked feature list.
    pub checklist: &'static [&'static str],
    pub cta: Link,
    /// Teaser under the card.
    pub footnote: &'static str,
}

/// One FAQ entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Closing call to action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CallToAction {
    pub headline: &'static str,
    pub subhead: &'static str,
    pub button: Link,
    pub footnote: &'static str,
}

/// Page footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Footer {
    pub copyright: &'static str,
    pub links: &'static [Link],
    pub tagline: &'static str,
}

/// A titled grid of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Section<T: 'static> {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub items: &'static [T],
}

/// Everything on the landing page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LandingPage {
    pub nav: Nav,
    pub hero: Hero,
    pub how_it_works: Section<Step>,
    pub report: SampleReport,
    pub features: Section<Card>,
    pub coverage: Coverage,
    pub pricing: Pricing,
    pub trust: &'static [Card],
    pub faqs: &'static [Faq],
    pub cta: CallToAction,
    pub footer: Footer,
}

impl LandingPage {
    /// Every in-page anchor target referenced by a link on the page.
    pub fn anchors(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = self
            .nav
            .links
            .iter()
            .chain([&self.nav.cta, &self.hero.primary, &self.hero.secondary])
            .chain([&self.pricing.cta, &self.cta.button])
            .filter(|l| l.is_anchor())
            .map(|l| l.href)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

/// Anchors of the sections that carry an id, sorted.
pub const SECTION_IDS: [&str; 4] = ["#cta", "#faq", "#how", "#pricing"];

const NAV_LINKS: [Link; 3] = [
    Link::new("How it Works", "#how"),
    Link::new("Pricing", "#pricing"),
    Link::new("FAQ", "#faq"),
];

const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Paste Your Prompt",
        description: "Drop in your system prompt, example input, and expected output. That's it.",
    },
    Step {
        number: 2,
        title: "We Test 20+ Models",
        description: "Your prompt runs against models from OpenAI, Anthropic, Google, Meta, Mistral & more.",
    },
    Step {
        number: 3,
        title: "Get Your Report",
        description: "Ranked results with cost, speed, and accuracy scores. Plus our recommendation.",
    },
];

const REPORT_ROWS: [ReportRow; 5] = [
    row(1, "Claude Sonnet 4.5", "Anthropic", 96, "1.6s", "$0.0045", 94.2),
    row(2, "GPT-4o", "OpenAI", 95, "1.8s", "$0.0075", 89.1),
    row(3, "Gemini 3 Pro", "Google", 94, "1.2s", "$0.0042", 88.7),
    row(4, "DeepSeek V3", "DeepSeek", 92, "2.4s", "$0.0014", 87.3),
    row(5, "Claude Haiku 4.5", "Anthropic", 89, "0.5s", "$0.0012", 86.1),
];

const fn row(
    rank: u8,
    model: &'static str,
    provider: &'static str,
    accuracy: u8,
    speed: &'static str,
    cost: &'static str,
    score: f64,
) -> ReportRow {
    ReportRow {
        rank,
        model,
        provider,
        accuracy,
        speed,
        cost,
        score,
        winner: rank == 1,
    }
}

const FEATURES: [Card; 4] = [
    Card {
        title: "Accuracy",
        description: "Semantic similarity to your expected output. JSON schema compliance. Format matching.",
    },
    Card {
        title: "Speed",
        description: "Time to first token. Total response time. Tokens per second across 3 runs.",
    },
    Card {
        title: "Cost",
        description: "Actual dollar cost per query. Monthly projection at your volume.",
    },
    Card {
        title: "Consistency",
        description: "Run 3x per model. Measure variance. Flag unreliable models.",
    },
];

const PROVIDERS: [&str; 10] = [
    "OpenAI",
    "Anthropic",
    "Google",
    "Meta",
    "Mistral",
    "DeepSeek",
    "Cohere",
    "Alibaba",
    "Microsoft",
    "Amazon",
];

const MODELS: [&str; 20] = [
    "GPT-5.2",
    "GPT-4o",
    "GPT-4o Mini",
    "Claude Opus 4.6",
    "Claude Sonnet 4.5",
    "Claude Haiku 4.5",
    "Gemini 3 Pro",
    "Gemini 3 Flash",
    "Gemini 3 Flash 8B",
    "DeepSeek R1",
    "DeepSeek V3",
    "Mistral Large 2",
    "Mistral Small",
    "Llama 4 405B",
    "Llama 4 70B",
    "Llama 4 8B",
    "Command R+",
    "Qwen 3 72B",
    "Phi-4",
    "Nova Micro",
];

const PRICING_CHECKLIST: [&str; 7] = [
    "20+ models tested",
    "3 runs per model for consistency",
    "Accuracy scoring vs your expected output",
    "Cost & latency data",
    "Top recommendation with explanation",
    "Shareable link",
    "PDF export",
];

const TRUST: [Card; 3] = [
    Card {
        title: "Data stays private",
        description: "Prompts deleted after 30 days. We never train on or share your data.",
    },
    Card {
        title: "Results in 3 minutes",
        description: "No setup, no CLI, no YAML configs. Just paste and go.",
    },
    Card {
        title: "Money-back guarantee",
        description: "If we fail to deliver your report, full refund. No questions asked.",
    },
];

/// FAQ entries in display order.
pub const FAQS: [Faq; 7] = [
    Faq {
        question: "How does accuracy scoring work?",
        answer: "We use embedding-based semantic similarity to compare model outputs against your expected output. For JSON, we also check schema compliance and data extraction accuracy.",
    },
    Faq {
        question: "Which models do you test?",
        answer: "20+ models from OpenAI, Anthropic, Google, Meta, Mistral, DeepSeek, Cohere, and more — spanning every price tier from $0.0001 to $0.06 per 1K tokens.",
    },
    Faq {
        question: "How long does a benchmark take?",
        answer: "Usually 2-4 minutes depending on prompt length and model response times. We run each model 3 times for consistency.",
    },
    Faq {
        question: "Do I need an API key?",
        answer: "Nope. We handle everything. Just paste your prompt and pay.",
    },
    Faq {
        question: "Can I test multimodal prompts?",
        answer: "Not yet — text-only for now. Multimodal and image prompts are coming soon.",
    },
    Faq {
        question: "What if I'm not satisfied?",
        answer: "If we fail to deliver your report, full refund. No questions asked.",
    },
    Faq {
        question: "Is my prompt data private?",
        answer: "Your prompts are only used for benchmarking and deleted after 30 days. We never train on your data or share it.",
    },
];

const FOOTER_LINKS: [Link; 4] = [
    Link::new("Privacy", "#"),
    Link::new("Terms", "#"),
    Link::new("Twitter", "#"),
    Link::new("GitHub", "#"),
];

/// The landing page.
pub const LANDING: LandingPage = LandingPage {
    nav: Nav {
        brand: Brand {
            accent: "Model",
            rest: "Pick",
        },
        links: &NAV_LINKS,
        cta: Link::new("Run a Benchmark", "#cta"),
    },
    hero: Hero {
        headline: "Stop overpaying for AI.",
        subhead: "Test your prompt against 20+ models. Get a ranked report with cost, speed, and accuracy scores. One report. Ten bucks.",
        primary: Link::new("Run a Benchmark — $9.99", "#cta"),
        secondary: Link::new("See how it works", "#how"),
        reassurance: "No API keys needed · Results in 3 minutes · No account required",
        demo: DemoEmbed {
            src: "/demo.mp4",
            poster: "/demo-poster.png",
            caption: "modelpick.ai — benchmark report",
        },
    },
    how_it_works: Section {
        heading: "How it works",
        subheading: "Three steps. Three minutes. Done.",
        items: &STEPS,
    },
    report: SampleReport {
        heading: "See a real report",
        subheading: "From a JSON data extraction benchmark",
        recommendation: Recommendation {
            model: "Claude Sonnet 4.5",
            metrics: ["96/100 accuracy", "1.6s latency", "$0.0045/query"],
            rationale: "For this JSON extraction prompt, Claude Sonnet 4.5 offers the best balance of accuracy and cost. It scores 96% at less than half the cost of GPT-4o.",
            savings: "Switch from GPT-4o → save $90/mo at 1,000 queries/day",
        },
        rows: &REPORT_ROWS,
        footnote: "Showing top 5 of 20 models tested",
    },
    features: Section {
        heading: "What we test",
        subheading: "Every dimension that matters for your use case",
        items: &FEATURES,
    },
    coverage: Coverage {
        heading: "20+ models tested",
        subheading: "Every price tier — from $0.0001 to $0.06 per 1K tokens",
        providers: &PROVIDERS,
        models: &MODELS,
    },
    pricing: Pricing {
        heading: "Simple pricing",
        subheading: "Spend $10, save $200/mo. No subscriptions required.",
        plan: "One Report",
        price: "$9.99",
        unit: "per benchmark report",
        checklist: &PRICING_CHECKLIST,
        cta: Link::new("Run a Benchmark", "#cta"),
        footnote: "Coming soon: $19/mo for monthly re-benchmarking",
    },
    trust: &TRUST,
    faqs: &FAQS,
    cta: CallToAction {
        headline: "You're probably overpaying for GPT-4o.",
        subhead: "Let's find out.",
        button: Link::new("Run a Benchmark — $9.99", "#"),
        footnote: "20 models · 3 runs each · results in ~3 minutes",
    },
    footer: Footer {
        copyright: "ModelPick © 2026",
        links: &FOOTER_LINKS,
        tagline: "Built by indie devs, for indie devs",
    },
};

#[cfg(test)]
#[path = "../../tests/unit/landing/content.rs"]
mod tests;
