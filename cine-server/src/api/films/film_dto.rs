use cine_catalog::Film;

use serde::Serialize;

/// Catalog entry as served to clients: upstream fields renamed and the
/// poster path completed to an absolute URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDto {
    pub tmdb_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<f64>,
}

impl From<&Film> for FilmDto {
    fn from(f: &Film) -> Self {
        Self {
            tmdb_id: f.id,
            title: f.title.clone(),
            description: f.overview.clone(),
            poster: f.poster_url(),
            release_date: f.release_date.clone(),
            rating: f.vote_average,
        }
    }
}
