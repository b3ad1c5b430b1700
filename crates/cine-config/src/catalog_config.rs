use crate::{ConfigErrorResult, DEFAULT_CATALOG_BASE_URL, DEFAULT_CATALOG_LANGUAGE, error::ConfigError};

use serde::Deserialize;

/// Upstream movie catalog (TMDB) settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TMDB API key. Optional: without it the server still starts and the
    /// films route answers 503 until a key is configured.
    pub api_key: Option<String>,
    pub language: String,
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: String::from(DEFAULT_CATALOG_LANGUAGE),
            base_url: String::from(DEFAULT_CATALOG_BASE_URL),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::catalog("catalog.language cannot be empty"));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::catalog("catalog.base_url cannot be empty"));
        }

        Ok(())
    }
}
