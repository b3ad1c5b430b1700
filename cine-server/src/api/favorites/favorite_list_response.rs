use crate::FavoriteDto;
use serde::Serialize;

/// One page of a user's favorites
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteListResponse {
    pub items: Vec<FavoriteDto>,
    pub page: u32,
    pub total_pages: u32,
    pub total: i64,
}
