//! Content briefs - outline, checklist and keyword templates keyed by page type
//!
//! A brief is assembled from the cleaned topic and the page type the topic
//! (or URL) classifies as. Everything here is a fixed template with the topic
//! interpolated; nothing is fetched or stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::{classify_page, PageClassification, PageType};
use crate::page_facts::PageSignals;
use crate::topic::{clean_topic, topic_from_url, word_count};

/// Topic used when the input cleans down to nothing
pub const DEFAULT_TOPIC: &str = "content strategy";
pub const DEFAULT_AUDIENCE: &str = "SaaS founders and marketing teams";
pub const DEFAULT_TONE: &str = "clear, practical, confident";

/// What the brief's input value is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Keyword,
    Url,
}

impl InputType {
    /// Parse leniently: only "url" selects URL mode
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("url") {
            InputType::Url
        } else {
            InputType::Keyword
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Keyword => write!(f, "keyword"),
            InputType::Url => write!(f, "url"),
        }
    }
}

/// Raw brief parameters, as received from the query string or CLI
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BriefRequest {
    pub input_type: String,
    pub input_value: String,
    pub search_intent: String,
    pub audience: String,
    pub tone: String,
}

/// Fallback audience and tone, usually taken from config
#[derive(Debug, Clone)]
pub struct BriefDefaults {
    pub audience: String,
    pub tone: String,
}

impl Default for BriefDefaults {
    fn default() -> Self {
        Self {
            audience: DEFAULT_AUDIENCE.to_string(),
            tone: DEFAULT_TONE.to_string(),
        }
    }
}

/// Structured content brief returned to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBrief {
    pub input_type: InputType,
    pub input_value: String,
    pub page_type: PageType,
    pub topic: String,
    pub search_intent: String,
    pub target_audience: String,
    pub tone_of_voice: String,
    pub recommended_word_count: u32,
    pub primary_keywords: Vec<String>,
    pub secondary_keywords: Vec<String>,
    pub questions: Vec<String>,
    pub outline: Vec<String>,
    pub internal_link_ideas: Vec<String>,
    pub competitor_examples: Vec<String>,
    pub checklist_items: Vec<String>,
}

/// Build a content brief from request parameters
pub fn build_brief(request: &BriefRequest, defaults: &BriefDefaults) -> ContentBrief {
    let input_type = InputType::from_label(&request.input_type);
    let input_value = request.input_value.trim().to_string();

    let raw_topic = match input_type {
        InputType::Url => topic_from_url(&input_value),
        InputType::Keyword => input_value.clone(),
    };
    let mut topic = clean_topic(&raw_topic);
    if topic.is_empty() {
        topic = DEFAULT_TOPIC.to_string();
    }

    let classification = classify_input(input_type, &input_value, &topic);
    let page_type = classification.page_type;

    tracing::debug!(
        %input_type,
        %page_type,
        confidence = classification.confidence,
        topic = %topic,
        "building content brief"
    );

    ContentBrief {
        input_type,
        input_value,
        page_type,
        search_intent: non_empty_or(&request.search_intent, default_search_intent(page_type)),
        target_audience: non_empty_or(&request.audience, &defaults.audience),
        tone_of_voice: non_empty_or(&request.tone, &defaults.tone),
        recommended_word_count: recommended_word_count(page_type, &topic),
        primary_keywords: primary_keywords(page_type, &topic),
        secondary_keywords: secondary_keywords(&topic),
        questions: build_questions(&topic),
        outline: build_outline(page_type, &topic),
        internal_link_ideas: internal_link_ideas(&topic),
        competitor_examples: competitor_examples(&topic),
        checklist_items: checklist_for(page_type),
        topic,
    }
}

/// Classify the brief's input. URLs are classified by URL alone, keywords by
/// the cleaned topic standing in for title and h1.
pub fn classify_input(input_type: InputType, input_value: &str, topic: &str) -> PageClassification {
    let signals = match input_type {
        InputType::Url => PageSignals::from_url(input_value),
        InputType::Keyword => PageSignals::from_topic(topic),
    };
    classify_page(&signals)
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Search intent assumed when the request leaves it blank
pub fn default_search_intent(page_type: PageType) -> &'static str {
    match page_type {
        PageType::Pricing => "transactional",
        PageType::Comparison | PageType::Feature => "commercial",
        PageType::Blog => "informational",
    }
}

/// Target length for the page. Blog length shrinks as the topic gets more specific.
pub fn recommended_word_count(page_type: PageType, topic: &str) -> u32 {
    match page_type {
        PageType::Pricing => 800,
        PageType::Feature => 1200,
        PageType::Comparison => 1600,
        PageType::Blog => match word_count(topic) {
            0..=2 => 2400,
            3..=4 => 2000,
            5..=6 => 1600,
            _ => 1200,
        },
    }
}

/// Section headings for the page
pub fn build_outline(page_type: PageType, topic: &str) -> Vec<String> {
    match page_type {
        PageType::Pricing => vec![
            format!("{} pricing overview", topic),
            "Plan comparison: what each tier includes".to_string(),
            format!("How to choose the right {} plan", topic),
            "Pricing FAQs".to_string(),
            "Start your free trial".to_string(),
        ],
        PageType::Feature => vec![
            format!("What {} does", topic),
            format!("Key capabilities of {}", topic),
            format!("How {} works", topic),
            "Integrations and workflow fit".to_string(),
            format!("Customer results with {}", topic),
            format!("Get started with {}", topic),
        ],
        PageType::Comparison => vec![
            format!("{}: quick comparison summary", topic),
            "Feature-by-feature comparison".to_string(),
            "Pricing comparison".to_string(),
            "Pros and cons of each option".to_string(),
            format!("Which {} option is right for you?", topic),
            "Verdict and recommendation".to_string(),
        ],
        PageType::Blog => vec![
            format!("Introduction: why {} matters", topic),
            format!("What is {}?", topic),
            format!("Key benefits of {}", topic),
            format!("How to get started with {}: step by step", topic),
            format!("Common {} mistakes to avoid", topic),
            format!("{} examples and best practices", topic),
            "Conclusion and next steps".to_string(),
        ],
    }
}

const BASE_CHECKLIST: &[&str] = &[
    "Include the primary keyword in the title tag and H1",
    "Write a unique meta description under 160 characters",
];

const PRICING_CHECKLIST: &[&str] = &[
    "Show every plan's price and billing period above the fold",
    "Add a plan comparison table",
    "Answer pricing objections in an FAQ section",
    "Add Product and Offer structured data",
];

const FEATURE_CHECKLIST: &[&str] = &[
    "Lead with the customer outcome, not the feature name",
    "Include screenshots or a short product demo",
    "Link to related integrations and use cases",
    "Add a clear call to action to start a trial",
];

const COMPARISON_CHECKLIST: &[&str] = &[
    "Keep the comparison fair and cite sources",
    "Include a side-by-side comparison table",
    "Review competitor pricing and features every quarter",
    "Explain who each option is best for",
];

const BLOG_CHECKLIST: &[&str] = &[
    "Answer the search query in the first paragraph",
    "Use descriptive H2 and H3 headings that follow the outline",
    "Add internal links to related product and blog pages",
    "Include an FAQ section covering the key questions",
];

/// On-page checklist for a page type: the shared base items plus type-specific ones
pub fn checklist_for(page_type: PageType) -> Vec<String> {
    let specific = match page_type {
        PageType::Pricing => PRICING_CHECKLIST,
        PageType::Feature => FEATURE_CHECKLIST,
        PageType::Comparison => COMPARISON_CHECKLIST,
        PageType::Blog => BLOG_CHECKLIST,
    };
    BASE_CHECKLIST
        .iter()
        .chain(specific.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Checklist for a page type label. Unknown or empty labels get the blog checklist.
pub fn build_checklist_for_type(page_type: &str) -> Vec<String> {
    checklist_for(PageType::from_label(page_type))
}

/// `topic suffix`, unless the topic already contains the suffix
fn keyword(topic: &str, suffix: &str) -> String {
    if topic.contains(suffix) {
        topic.to_string()
    } else {
        format!("{} {}", topic, suffix)
    }
}

/// First `count` distinct entries of `candidates`, then of `alternates`
fn distinct_keywords(candidates: Vec<String>, alternates: Vec<String>, count: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(count);
    for item in candidates.into_iter().chain(alternates) {
        if out.len() == count {
            break;
        }
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Head terms to target, lowercase. Always three.
pub fn primary_keywords(page_type: PageType, topic: &str) -> Vec<String> {
    let t = topic.to_lowercase();
    let (candidates, alternates) = match page_type {
        PageType::Pricing => (
            vec![keyword(&t, "pricing"), keyword(&t, "plans"), keyword(&t, "cost")],
            ["free trial", "discounts", "billing"],
        ),
        PageType::Comparison => (
            vec![
                keyword(&t, "comparison"),
                keyword(&t, "alternatives"),
                format!("best {}", t),
            ],
            ["competitors", "reviews", "versus"],
        ),
        PageType::Feature => (
            vec![keyword(&t, "software"), keyword(&t, "features"), keyword(&t, "tool")],
            ["integrations", "use cases", "platform"],
        ),
        PageType::Blog => (
            vec![t.clone(), format!("what is {}", t), keyword(&t, "guide")],
            ["tutorial", "tips", "explained"],
        ),
    };
    let alternates = alternates.iter().map(|suffix| format!("{} {}", t, suffix)).collect();
    distinct_keywords(candidates, alternates, 3)
}

/// Supporting long-tail terms, lowercase. Always four.
pub fn secondary_keywords(topic: &str) -> Vec<String> {
    let t = topic.to_lowercase();
    let audience_term = if t.contains("saas") {
        format!("{} tools", t)
    } else {
        format!("{} for saas", t)
    };
    let candidates = vec![
        audience_term,
        keyword(&t, "examples"),
        keyword(&t, "best practices"),
        format!("how to choose {}", t),
    ];
    let alternates = ["use cases", "strategy", "software"]
        .iter()
        .map(|suffix| format!("{} {}", t, suffix))
        .collect();
    distinct_keywords(candidates, alternates, 4)
}

/// FAQ-style questions the page should answer
pub fn build_questions(topic: &str) -> Vec<String> {
    vec![
        format!("What is {} and why does it matter?", topic),
        format!("How do SaaS teams use {}?", topic),
        format!("How do you measure success with {}?", topic),
    ]
}

pub fn internal_link_ideas(topic: &str) -> Vec<String> {
    vec![
        format!("Link to your main {} guide or pillar page", topic),
        format!("Link to the product or feature page most related to {}", topic),
    ]
}

pub fn competitor_examples(topic: &str) -> Vec<String> {
    vec![format!("Top-ranking {} page from a direct competitor", topic)]
}

impl ContentBrief {
    /// Render the brief as a Markdown document
    pub fn to_markdown(&self) -> String {
        Markdown(self).to_string()
    }
}

/// Markdown view of a brief
struct Markdown<'a>(&'a ContentBrief);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let brief = self.0;
        writeln!(f, "# Content brief: {}", brief.topic)?;
        writeln!(f)?;
        writeln!(f, "- **Input:** {} `{}`", brief.input_type, brief.input_value)?;
        writeln!(f, "- **Page type:** {}", brief.page_type)?;
        writeln!(f, "- **Search intent:** {}", brief.search_intent)?;
        writeln!(f, "- **Audience:** {}", brief.target_audience)?;
        writeln!(f, "- **Tone:** {}", brief.tone_of_voice)?;
        writeln!(f, "- **Recommended length:** ~{} words", brief.recommended_word_count)?;

        write_list(f, "Primary keywords", &brief.primary_keywords, false)?;
        write_list(f, "Secondary keywords", &brief.secondary_keywords, false)?;
        write_list(f, "Outline", &brief.outline, true)?;
        write_list(f, "Questions to answer", &brief.questions, false)?;
        write_list(f, "Internal link ideas", &brief.internal_link_ideas, false)?;
        write_list(f, "Competitor examples", &brief.competitor_examples, false)?;

        writeln!(f, "\n## Checklist\n")?;
        for item in &brief.checklist_items {
            writeln!(f, "- [ ] {}", item)?;
        }
        Ok(())
    }
}

fn write_list(out: &mut impl fmt::Write, heading: &str, items: &[String], numbered: bool) -> fmt::Result {
    writeln!(out, "\n## {}\n", heading)?;
    for (i, item) in items.iter().enumerate() {
        if numbered {
            writeln!(out, "{}. {}", i + 1, item)?;
        } else {
            writeln!(out, "- {}", item)?;
        }
    }
    Ok(())
}
