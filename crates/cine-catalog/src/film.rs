//! TMDB wire types.

use serde::Deserialize;

/// TMDB image CDN prefix for poster paths, w500 rendition.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One page of the TMDB list envelope, shared by search and popular.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmPage {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Film>,
    pub total_pages: u32,
    pub total_results: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Film {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    /// Relative CDN path, e.g. "/abc123.jpg"
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Film {
    /// Absolute poster URL, when the catalog has one.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }
}
