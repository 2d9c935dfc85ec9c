//! Page type classification - score-based SaaS page categorisation
//!
//! Each page type has a primary and a secondary keyword group. A group that
//! matches anywhere in the page's text adds its points once, and the page type
//! with the strictly highest score wins. Ties go to the type evaluated first,
//! and a page with no matches at all is a blog post.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::page_facts::PageSignals;

/// Points contributed by a primary keyword group
pub const PRIMARY_POINTS: u32 = 2;
/// Points contributed by a secondary keyword group
pub const SECONDARY_POINTS: u32 = 1;
/// Score at which confidence reaches 1.0
const FULL_CONFIDENCE_SCORE: f32 = 4.0;
/// Confidence floor, reported even when nothing matched
const MIN_CONFIDENCE: f32 = 0.1;

/// Coarse content category of a SaaS page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Pricing,
    Comparison,
    Feature,
    #[default]
    Blog,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Pricing => "pricing",
            PageType::Comparison => "comparison",
            PageType::Feature => "feature",
            PageType::Blog => "blog",
        }
    }

    /// Parse a page type leniently; anything unrecognised is a blog post
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pricing" => Ok(PageType::Pricing),
            "comparison" => Ok(PageType::Comparison),
            "feature" => Ok(PageType::Feature),
            "blog" => Ok(PageType::Blog),
            other => Err(format!(
                "unknown page type '{}' (expected pricing, comparison, feature or blog)",
                other
            )),
        }
    }
}

/// A group of keywords that scores once if any of them appears
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    pub terms: &'static [&'static str],
    pub points: u32,
    /// Human-readable reason recorded when the group matches
    pub signal: &'static str,
}

impl KeywordGroup {
    /// Check the group against a lowercase haystack
    pub fn matches(&self, haystack: &str) -> bool {
        self.terms.iter().any(|term| haystack.contains(term))
    }
}

/// Keyword rules for one page type
#[derive(Debug, Clone)]
pub struct PageTypeRule {
    pub page_type: PageType,
    pub primary: KeywordGroup,
    pub secondary: KeywordGroup,
}

/// Static keyword rules, in evaluation order
pub static PAGE_TYPE_RULES: &[PageTypeRule] = &[
    PageTypeRule {
        page_type: PageType::Pricing,
        primary: KeywordGroup {
            terms: &["pricing", "price", "cost"],
            points: PRIMARY_POINTS,
            signal: "pricing language in url/title",
        },
        secondary: KeywordGroup {
            terms: &["plan", "per month", "/mo", "billing", "free trial", "tier"],
            points: SECONDARY_POINTS,
            signal: "plan or billing terms",
        },
    },
    PageTypeRule {
        page_type: PageType::Comparison,
        primary: KeywordGroup {
            terms: &[" vs ", "vs.", "/vs/", "versus", "compare", "comparison"],
            points: PRIMARY_POINTS,
            signal: "head-to-head comparison language",
        },
        secondary: KeywordGroup {
            terms: &["alternative", "competitor", "better than", "switch from"],
            points: SECONDARY_POINTS,
            signal: "alternatives or competitor terms",
        },
    },
    PageTypeRule {
        page_type: PageType::Feature,
        primary: KeywordGroup {
            terms: &["feature", "product tour", "how it works"],
            points: PRIMARY_POINTS,
            signal: "feature or product tour language",
        },
        secondary: KeywordGroup {
            terms: &["integration", "platform", "automation", "dashboard", "workflow"],
            points: SECONDARY_POINTS,
            signal: "product capability terms",
        },
    },
    PageTypeRule {
        page_type: PageType::Blog,
        primary: KeywordGroup {
            terms: &["blog", "guide", "how to", "what is"],
            points: PRIMARY_POINTS,
            signal: "blog or guide language",
        },
        secondary: KeywordGroup {
            terms: &["tips", "examples", "best practices", "tutorial", "article", "learn"],
            points: SECONDARY_POINTS,
            signal: "educational content terms",
        },
    },
];

/// Outcome of classifying a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageClassification {
    pub page_type: PageType,
    /// Confidence in the winning type (0.1 - 1.0)
    pub confidence: f32,
    /// Why each matching keyword group scored, in evaluation order
    pub signals: Vec<String>,
}

/// Score one rule against a haystack, recording signals for matched groups
fn score_rule(rule: &PageTypeRule, haystack: &str, signals: &mut Vec<String>) -> u32 {
    let mut score = 0;
    for group in [&rule.primary, &rule.secondary] {
        if group.matches(haystack) {
            score += group.points;
            signals.push(group.signal.to_string());
        }
    }
    score
}

/// Map a raw score to a confidence value
pub fn confidence_for_score(score: u32) -> f32 {
    (score as f32 / FULL_CONFIDENCE_SCORE).clamp(MIN_CONFIDENCE, 1.0)
}

/// Classify a page from its URL, title, h1 and meta description
pub fn classify_page(signals: &PageSignals) -> PageClassification {
    let haystack = signals.haystack();
    let mut evidence = Vec::new();

    let mut best = PageType::Blog;
    let mut best_score = 0;

    for rule in PAGE_TYPE_RULES {
        let score = score_rule(rule, &haystack, &mut evidence);
        if score > best_score {
            best = rule.page_type;
            best_score = score;
        }
    }

    PageClassification {
        page_type: best,
        confidence: confidence_for_score(best_score),
        signals: evidence,
    }
}
