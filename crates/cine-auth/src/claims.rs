use crate::{AuthError, Result as AuthErrorResult, token_service::TOKEN_TTL_SECS};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims. The user id is the sole application claim; no issuer or
/// audience is set or checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Claims for a freshly issued token: valid from now for the full
    /// 7-day window.
    pub fn new(user_id: &str) -> Self {
        let iat = chrono::Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            exp: iat + TOKEN_TTL_SECS,
            iat,
        }
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
