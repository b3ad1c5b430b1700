use crate::{CatalogError, FilmPage, Result as CatalogResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;

/// HTTP client for the upstream movie catalog (TMDB v3 API).
///
/// Constructed once at startup, and only when an API key is configured -
/// the server holds it as an optional dependency and answers 503 on the
/// films route while it is absent.
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    language: String,
    client: ReqwestClient,
}

impl CatalogClient {
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.themoviedb.org/3")
    /// * `api_key` - TMDB API key, sent as a query parameter
    /// * `language` - locale for titles and overviews (e.g., "en-US")
    pub fn new(base_url: &str, api_key: &str, language: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            language: language.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// One page of catalog results: `/search/movie` for a non-empty query,
    /// `/movie/popular` otherwise. Single attempt; any failure is the
    /// caller's 502.
    pub async fn search(&self, query: Option<&str>, page: u32) -> CatalogResult<FilmPage> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        let url = match query {
            Some(_) => format!("{}/search/movie", self.base_url),
            None => format!("{}/movie/popular", self.base_url),
        };

        let mut req = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(&[("page", page)]);

        if let Some(q) = query {
            req = req.query(&[("query", q)]);
        }

        let response = req.send().await.map_err(CatalogError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        response
            .json::<FilmPage>()
            .await
            .map_err(CatalogError::from_reqwest)
    }
}
