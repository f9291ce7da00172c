//! Client configuration

use ifpa_core::{Error, Result};

/// IFPA configuration from environment variables
#[derive(Debug, Clone)]
pub struct IfpaConfig {
    pub base_url: String,
    pub api_key: String,
}

impl IfpaConfig {
    /// Default IFPA API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://api.ifpapinball.com";

    /// Configuration for the default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Load configuration from environment variables
    /// Uses IFPA_API_KEY for auth
    /// Uses IFPA_BASE_URL with default fallback
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("IFPA_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration("IFPA_API_KEY environment variable not set".to_string())
            })?;

        Ok(Self {
            base_url: lookup("IFPA_BASE_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            api_key,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(key) = api_key {
            self.api_key = key;
        }
        self
    }
}
