use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from the upstream catalog call. All of them map to one 502 at the
/// edge; the call is single-attempt with no retry.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog returned status {status} {location}")]
    Status {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Catalog response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: err,
            }
        } else {
            CatalogError::Http {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: err,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
