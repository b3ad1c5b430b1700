use crate::FilmDto;
use serde::Serialize;

/// One page of catalog results, pagination passed through from upstream
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmListResponse {
    pub items: Vec<FilmDto>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}
