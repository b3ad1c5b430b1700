//! Favorite movie entity - a catalog entry saved by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie a user has saved. Scoped to its owner: list and delete only
/// operate within a single `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Poster image URL as supplied by the client (usually a TMDB CDN URL)
    pub poster: Option<String>,
    pub release_date: Option<String>,
    /// Upstream catalog id, when the favorite came from a catalog search
    pub tmdb_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(
        user_id: Uuid,
        title: String,
        description: Option<String>,
        poster: Option<String>,
        release_date: Option<String>,
        tmdb_id: Option<i64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            poster,
            release_date,
            tmdb_id,
            created_at: now,
            updated_at: now,
        }
    }
}
