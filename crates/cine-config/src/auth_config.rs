use crate::{ConfigErrorResult, error::ConfigError};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for issued tokens. There is intentionally no
    /// built-in fallback value: a process without an explicit secret must
    /// not come up.
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            Some(secret) if secret.trim().is_empty() => Err(ConfigError::auth(
                "auth.jwt_secret is not configured; set it in config.toml or CINE_AUTH_JWT_SECRET",
            )),
            Some(secret) if secret.len() < 32 => Err(ConfigError::auth(
                "auth.jwt_secret must be at least 32 characters",
            )),
            Some(_) => Ok(()),
            None => Err(ConfigError::auth(
                "auth.jwt_secret is not configured; set it in config.toml or CINE_AUTH_JWT_SECRET",
            )),
        }
    }
}
