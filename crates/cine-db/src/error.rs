use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// The store itself rejected a second identity for an email the unique
    /// index already holds.
    #[error("Duplicate email: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    /// The store cannot be reached right now (pool exhausted or closed,
    /// connection lost). Distinct from "not found" and from a query failure;
    /// the edge maps this to 503.
    #[error("Database unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// A stored value did not decode into its domain type.
    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let unavailable = matches!(
            source,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        );

        if unavailable {
            Self::Unavailable {
                message: source.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            Self::Sqlx {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
