//! Topic cleaning - turn page titles, URL slugs and raw keywords into a
//! canonical topic phrase.
//!
//! The steps run in a fixed order: truncate, then stop-phrases, junk fragments
//! and leading filler repeated until the text settles, then the "saas" prefix
//! and title case. Changing the order changes the output, so treat the
//! sequence in [`clean_topic`] as part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// Pre-compiled regex for whitespace normalization (compile once, use many times)
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex pattern")
});

/// Navigation and marketing boilerplate. Everything from the first match onward is dropped.
static STOP_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(skip to main content|skip to content|sign in|log in|sign up|get started|book a demo|request a demo|start your free trial|start free trial|trusted by|loved by|all rights reserved|privacy policy|terms of service|cookie)",
    )
    .expect("Invalid stop phrase regex pattern")
});

/// Fragments removed wherever they appear
static JUNK_FRAGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\bfor de\b|checklist|template|\(updated\)|\[updated\]|free download|pdf)")
        .expect("Invalid junk fragment regex pattern")
});

/// Filler that commonly opens a blog title or search query
static LEADING_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(what is|what are|how do you|how to|the ultimate guide to|the complete guide to|a beginner's guide to|guide to|introduction to|why|best|top \d+)\s+",
    )
    .expect("Invalid leading phrase regex pattern")
});

/// Characters that separate a title from site names and taglines
const TRUNCATE_AT: &[char] = &['|', '-', '–', '—', ':'];

/// Words kept lowercase by [`title_case`] unless they open the phrase
const MINOR_WORDS: &[&str] = &["and", "or", "for", "to", "of", "in", "on", "a", "an", "the"];

/// Clean a raw title, keyword or slug into a title-cased topic phrase.
///
/// Returns an empty string when nothing survives cleaning. Applying it to its
/// own output returns the same string.
pub fn clean_topic(raw: &str) -> String {
    let collapsed = normalize_whitespace(raw);
    if collapsed.is_empty() {
        return String::new();
    }

    let head = match collapsed.find(TRUNCATE_AT) {
        Some(idx) => &collapsed[..idx],
        None => collapsed.as_str(),
    };

    // Dropping a fragment can join its neighbours into a new stop or leading
    // phrase ("Sign PDF in" -> "Sign in"), so repeat until nothing changes.
    let mut text = head.to_string();
    loop {
        let before = text.clone();

        if let Some(m) = STOP_PHRASE_RE.find(&text) {
            text.truncate(m.start());
        }
        while JUNK_FRAGMENT_RE.is_match(&text) {
            text = normalize_whitespace(&JUNK_FRAGMENT_RE.replace_all(&text, ""));
        }
        text = normalize_whitespace(&text);
        while let Some(m) = LEADING_PHRASE_RE.find(&text) {
            text = text[m.end()..].to_string();
        }

        if text == before {
            break;
        }
    }

    let mut text = normalize_whitespace(&text);
    if text.is_empty() {
        return String::new();
    }

    if head.to_lowercase().contains("saas") && !text.to_lowercase().contains("saas") {
        text = format!("saas {}", text);
    }

    title_case(&text)
}

/// Derive raw topic text from a page URL.
///
/// Uses the last meaningful path segment (`/blog/content-marketing-tips` gives
/// `content marketing tips`), falling back to the bare host name. Input that
/// does not parse as a URL is returned trimmed, unchanged.
pub fn topic_from_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).or_else(|_| Url::parse(&format!("https://{}", trimmed)));

    let url = match parsed {
        Ok(u) if u.host_str().is_some() => u,
        _ => return trimmed.to_string(),
    };

    let slug = url
        .path_segments()
        .and_then(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(strip_extension)
                .filter(|s| !s.eq_ignore_ascii_case("index"))
                .last()
        });

    match slug {
        Some(segment) => {
            let spaced = segment
                .replace("%20", " ")
                .replace(['-', '_', '+'], " ");
            normalize_whitespace(&spaced)
        }
        None => url
            .host_str()
            .map(|h| h.trim_start_matches("www."))
            .and_then(|h| h.split('.').next())
            .unwrap_or_default()
            .to_string(),
    }
}

/// Title-case a phrase, keeping minor words lowercase after the first word
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && MINOR_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-separated words in a topic
pub fn word_count(topic: &str) -> usize {
    topic.split_whitespace().count()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn strip_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends
fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_topic(""), "");
        assert_eq!(clean_topic("   \n\t "), "");
    }

    #[test]
    fn test_truncates_at_separator() {
        assert_eq!(clean_topic("Pricing | Acme SaaS"), "Pricing");
        assert_eq!(clean_topic("Email Automation - Acme"), "Email Automation");
        assert_eq!(clean_topic("Onboarding: a field guide"), "Onboarding");
        assert_eq!(clean_topic("Churn – Acme Blog"), "Churn");
    }

    #[test]
    fn test_separator_first_yields_empty() {
        assert_eq!(clean_topic("| Acme"), "");
    }

    #[test]
    fn test_junk_and_leading_phrase() {
        assert_eq!(clean_topic("What is SEO for de checklist"), "Seo");
        assert_eq!(clean_topic("Content Calendar Template (Updated)"), "Content Calendar");
        assert_eq!(clean_topic("How to write release notes"), "Write Release Notes");
        assert_eq!(clean_topic("Top 10 onboarding emails"), "Onboarding Emails");
    }

    #[test]
    fn test_leading_phrases_stripped_repeatedly() {
        assert_eq!(clean_topic("what is how to churn analysis"), "Churn Analysis");
    }

    #[test]
    fn test_stop_phrase_cuts_boilerplate() {
        assert_eq!(
            clean_topic("Product analytics Sign in Get started"),
            "Product Analytics"
        );
        assert_eq!(clean_topic("Skip to content Home"), "");
    }

    #[test]
    fn test_saas_prefix_restored() {
        assert_eq!(
            clean_topic("Churn reduction guide trusted by SaaS teams"),
            "Saas Churn Reduction Guide"
        );
        // Already mentions saas: no duplicate prefix
        assert_eq!(clean_topic("SaaS onboarding"), "Saas Onboarding");
    }

    #[test]
    fn test_stop_phrase_exposed_by_junk_removal() {
        assert_eq!(clean_topic("Sign PDF in Bulk"), "");
        assert_eq!(clean_topic("Log Checklist in Tool"), "");
        assert_eq!(clean_topic("Get PDF started fast"), "");
        assert_eq!(clean_topic("Invoicing Sign Template up today"), "Invoicing");
    }

    #[test]
    fn test_minor_words_stay_lowercase() {
        assert_eq!(
            clean_topic("the art of cold outreach for founders"),
            "The Art of Cold Outreach for Founders"
        );
    }

    #[test]
    fn test_clean_is_fixed_point() {
        let inputs = [
            "Pricing | Acme SaaS",
            "What is SEO for de checklist",
            "Churn reduction guide trusted by SaaS teams",
            "the ultimate guide to   product-led growth",
            "Best CRM for startups: 2024 edition",
            "content marketing",
            "Top 7 SaaS metrics PDF",
            "Sign PDF in Bulk",
            "Log Checklist in Tool",
            "Get PDF started fast",
            "SaaS for de billing",
            "Best checklist guide to onboarding",
        ];
        for input in inputs {
            let once = clean_topic(input);
            assert_eq!(clean_topic(&once), once, "not a fixed point for {:?}", input);
        }
    }

    #[test]
    fn test_topic_from_url_uses_slug() {
        assert_eq!(
            topic_from_url("https://acme.com/blog/content-marketing-tips"),
            "content marketing tips"
        );
        assert_eq!(topic_from_url("https://acme.com/docs/api_rate_limits.html"), "api rate limits");
        assert_eq!(topic_from_url("acme.com/pricing/"), "pricing");
    }

    #[test]
    fn test_topic_from_url_falls_back_to_host() {
        assert_eq!(topic_from_url("https://www.acme.com/"), "acme");
        assert_eq!(topic_from_url("https://acme.io/index.html"), "acme");
    }

    #[test]
    fn test_topic_from_url_passes_through_plain_text() {
        assert_eq!(topic_from_url("  content marketing "), "content marketing");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Content Marketing"), 2);
        assert_eq!(word_count(""), 0);
    }
}
