use std::time::Duration;

use once_cell::sync::Lazy;
use ureq::ResponseExt;
use url::Url;

use crate::error::{Result, SeoError};
use crate::page_facts::PageSignals;

/// Default HTTP request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 20;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; seobrief/0.1)";

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
        .build()
        .into()
});

/// A fetched HTML page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    pub html: String,
}

impl FetchedPage {
    /// Extract classification signals from the page
    pub fn signals(&self) -> PageSignals {
        PageSignals::from_html(&self.url, &self.html)
    }
}

/// Check that a URL is absolute http(s) before fetching it
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SeoError::InvalidInput(format!(
            "unsupported URL scheme '{}' (expected http or https)",
            other
        ))),
    }
}

/// Fetch a page over HTTP (ureq)
pub fn fetch_page(raw_url: &str) -> Result<FetchedPage> {
    let url = validate_url(raw_url)?;
    tracing::debug!(url = %url, "fetching page");

    let response = HTTP_AGENT
        .get(url.as_str())
        .header("User-Agent", USER_AGENT)
        .header("Accept", "text/html,application/xhtml+xml")
        .call()?;

    let final_url = response.get_uri().to_string();
    let html = response.into_body().read_to_string()?;

    if html.trim().is_empty() {
        return Err(SeoError::FetchError(format!("{} returned an empty body", final_url)));
    }

    Ok(FetchedPage {
        url: final_url,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http() {
        assert!(validate_url("https://acme.com/pricing").is_ok());
        assert!(validate_url(" http://acme.com ").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://acme.com/file"),
            Err(SeoError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_url("acme.com/pricing"),
            Err(SeoError::UrlParseError(_))
        ));
    }

    #[test]
    fn test_fetched_page_signals() {
        let page = FetchedPage {
            url: "https://acme.com/features".into(),
            html: "<html><head><title>Features</title></head><body><h1>Automation</h1></body></html>".into(),
        };
        let signals = page.signals();
        assert_eq!(signals.title, "Features");
        assert_eq!(signals.h1, "Automation");
    }
}
