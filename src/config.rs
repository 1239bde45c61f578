//! Startup configuration read from the environment
//!
//! The API key is checked once here, before any query is accepted.

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Provider settings
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank("API_KEY")
            .or_else(|| non_blank("GEMINI_API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = non_blank("WEB_EXPLORER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = match non_blank("WEB_EXPLORER_BASE_URL") {
            Some(raw) => {
                url::Url::parse(raw.trim())
                    .map_err(|_| ConfigError::InvalidBaseUrl(raw.clone()))?;
                raw.trim().trim_end_matches('/').to_string()
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            base_url,
        })
    }
}
