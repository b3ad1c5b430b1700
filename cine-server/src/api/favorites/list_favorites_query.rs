use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListFavoritesQuery {
    /// 1-based page number (default 1)
    pub page: Option<u32>,
    /// Page size (default 10, clamped to 1..=50)
    pub limit: Option<u32>,
}
