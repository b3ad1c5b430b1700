use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListFilmsQuery {
    /// Search query; blank or absent lists popular titles instead
    pub q: Option<String>,
    /// 1-based page, forwarded to the upstream catalog
    pub page: Option<u32>,
}
