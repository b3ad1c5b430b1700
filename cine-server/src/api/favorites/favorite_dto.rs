use cine_core::Favorite;

use serde::Serialize;

/// Favorite DTO for JSON serialization. Never exposes `user_id`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub release_date: Option<String>,
    pub tmdb_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Favorite> for FavoriteDto {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id.to_string(),
            title: f.title,
            description: f.description,
            poster: f.poster,
            release_date: f.release_date,
            tmdb_id: f.tmdb_id,
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
        }
    }
}
