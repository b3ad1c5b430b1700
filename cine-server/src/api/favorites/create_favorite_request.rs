use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    /// Movie title (required; validated in the handler)
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Poster image URL
    #[serde(default)]
    pub poster: Option<String>,

    #[serde(default)]
    pub release_date: Option<String>,

    /// Upstream catalog id
    #[serde(default)]
    pub tmdb_id: Option<i64>,
}
