use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token signature mismatch {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Malformed token: {source} {location}")]
    Malformed {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
