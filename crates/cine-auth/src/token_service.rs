use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Fixed token validity window: 7 days from issuance.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Issues and verifies HS256 bearer tokens.
///
/// Stateless by design: validity is decided by signature and expiry alone,
/// with no server-side session or revocation store. A leaked token stays
/// valid until its embedded expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a service over a shared HS256 secret. The secret comes from
    /// configuration, loaded once at startup; there is no fallback.
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: past the embedded expiry instant the token is expired.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a signed token carrying `user_id` as its sole claim.
    #[track_caller]
    pub fn issue(&self, user_id: &str) -> AuthErrorResult<String> {
        let claims = Claims::new(user_id);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a presented token and return its claims.
    ///
    /// Failure taxonomy: `TokenExpired` past the embedded expiry,
    /// `InvalidSignature` on signature mismatch, `Malformed` for anything
    /// that does not parse as a JWT.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::Malformed {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
