//! PageSignals - the text fields a page is classified from
//!
//! Signals can be built directly from query parameters, or extracted from a
//! fetched HTML document (title, first h1, meta description).

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Text describing a candidate page. Every field is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSignals {
    pub url: String,
    pub title: String,
    pub h1: String,
    pub meta_description: String,
}

impl PageSignals {
    /// Signals for a page known only by its URL
    pub fn from_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Signals for a bare topic, used as both title and h1
    pub fn from_topic(topic: &str) -> Self {
        Self {
            title: topic.to_string(),
            h1: topic.to_string(),
            ..Default::default()
        }
    }

    /// Extract signals from an HTML document
    pub fn from_html(url: &str, html: &str) -> Self {
        let document = Html::parse_document(html);

        let title = first_text(&document, "title");
        let h1 = first_text(&document, "h1");
        let meta_description = meta_content(&document, r#"meta[name="description"]"#)
            .or_else(|| meta_content(&document, r#"meta[property="og:description"]"#))
            .unwrap_or_default();

        Self {
            url: url.to_string(),
            title,
            h1,
            meta_description,
        }
    }

    /// Lowercased concatenation of all fields, separated by spaces
    pub fn haystack(&self) -> String {
        [
            self.url.as_str(),
            self.title.as_str(),
            self.h1.as_str(),
            self.meta_description.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// True when no field carries any text
    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
            && self.title.trim().is_empty()
            && self.h1.trim().is_empty()
            && self.meta_description.trim().is_empty()
    }
}

fn first_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| {
            el.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .find(|c| !c.is_empty())
}
