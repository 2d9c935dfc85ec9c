use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::brief::{BriefDefaults, DEFAULT_AUDIENCE, DEFAULT_TONE};
use crate::error::{Result, SeoError};

/// Environment variables checked, in order, for the Google Identity client id
pub const GOOGLE_CLIENT_ID_VARS: &[&str] =
    &["GOOGLE_CLIENT_ID", "GSC_CLIENT_ID", "VITE_GOOGLE_CLIENT_ID"];

/// Global seobrief configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Audience used when a brief request leaves it blank
    #[serde(default = "default_audience")]
    pub default_audience: String,

    /// Tone used when a brief request leaves it blank
    #[serde(default = "default_tone")]
    pub default_tone: String,

    /// Google Identity client id, overridden by the environment
    #[serde(default)]
    pub google_client_id: Option<String>,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            default_audience: default_audience(),
            default_tone: default_tone(),
            google_client_id: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| SeoError::ConfigError(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Supports SEOBRIEF_CONFIG environment variable for test isolation
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("SEOBRIEF_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "seobrief")
            .ok_or_else(|| SeoError::ConfigError("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay environment variables. `lookup` is `std::env::var` outside of tests.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("SEOBRIEF_BIND").filter(|v| !v.trim().is_empty()) {
            self.bind = bind.trim().to_string();
        }

        let from_env = GOOGLE_CLIENT_ID_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());
        if from_env.is_some() {
            self.google_client_id = from_env;
        }
    }

    /// Parse the bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|_| SeoError::ConfigError(format!("Invalid bind address '{}'", self.bind)))
    }

    /// Google client id, or empty when unset
    pub fn google_client_id(&self) -> String {
        self.google_client_id
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }

    /// Audience and tone fallbacks for brief generation
    pub fn brief_defaults(&self) -> BriefDefaults {
        BriefDefaults {
            audience: self.default_audience.clone(),
            tone: self.default_tone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.default_audience, DEFAULT_AUDIENCE);
        assert!(config.google_client_id().is_empty());
        assert!(config.bind_addr().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("default_tone = \"playful\"\n").unwrap();
        assert_eq!(config.default_tone, "playful");
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.brief_defaults().tone, "playful");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            Config::from_toml("bind = ["),
            Err(SeoError::TomlError(_))
        ));
    }

    #[test]
    fn test_google_client_id_precedence() {
        let mut config = Config::default();
        config.apply_env(env(&[
            ("GSC_CLIENT_ID", "gsc-id"),
            ("VITE_GOOGLE_CLIENT_ID", "vite-id"),
        ]));
        assert_eq!(config.google_client_id(), "gsc-id");

        let mut config = Config::default();
        config.apply_env(env(&[("GOOGLE_CLIENT_ID", "  "), ("VITE_GOOGLE_CLIENT_ID", " vite-id ")]));
        assert_eq!(config.google_client_id(), "vite-id");
    }

    #[test]
    fn test_env_keeps_file_client_id_when_unset() {
        let mut config = Config {
            google_client_id: Some("from-file".into()),
            ..Default::default()
        };
        config.apply_env(env(&[]));
        assert_eq!(config.google_client_id(), "from-file");
    }

    #[test]
    fn test_bind_override_and_validation() {
        let mut config = Config::default();
        config.apply_env(env(&[("SEOBRIEF_BIND", "0.0.0.0:8080")]));
        assert_eq!(config.bind_addr().unwrap().port(), 8080);

        config.bind = "not-an-address".into();
        assert!(matches!(config.bind_addr(), Err(SeoError::ConfigError(_))));
    }
}
