use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Fetch failed: {0}")]
    FetchError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SeoError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SeoError::HttpError(_) | SeoError::FetchError(_) => Some(
                "Check your internet connection, or classify without fetching:\n  seobrief classify --url <url> --title \"<title>\""
            ),
            SeoError::UrlParseError(_) => Some(
                "URLs must be absolute, e.g. https://example.com/pricing"
            ),
            SeoError::TomlError(_) | SeoError::ConfigError(_) => Some(
                "Check your config file with `seobrief config path`\nOr reset it with `seobrief config init --force`"
            ),
            SeoError::ServerError(_) => Some(
                "Is another process using the port? Try:\n  seobrief serve --bind 127.0.0.1:3001"
            ),
            SeoError::InvalidInput(_) => Some(
                "Run `seobrief --help` to see accepted arguments"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeoError>;
