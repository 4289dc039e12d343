//! Catalog HTTP client.
//!
//! Issues a single `GET <base>/search?term=<term>` per call and parses the
//! JSON body. The term is interpolated into the URL as-is, without
//! percent-encoding; callers own any escaping. No retries, no timeout
//! beyond the transport defaults.

use super::dto::{self, AlbumListResponse};
use super::error::{CatalogError, GENERIC_FETCH_FAILURE};

/// Catalog search API client.
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

const USER_AGENT: &str = concat!(
    "AlbumScout/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/album-scout)"
);

impl CatalogClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search the catalog for a term.
    pub async fn search(&self, term: &str) -> Result<AlbumListResponse, CatalogError> {
        let url = self.search_url(term);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Prefer the upstream message when the error body carries one
            if let Ok(dto::ApiError {
                message: Some(message),
            }) = response.json::<dto::ApiError>().await
            {
                return Err(CatalogError::Api(message));
            }
            return Err(CatalogError::Api(GENERIC_FETCH_FAILURE.to_string()));
        }

        response
            .json::<AlbumListResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Build the search URL. The raw term goes in verbatim.
    fn search_url(&self, term: &str) -> String {
        format!("{}/search?term={}", self.base_url, term)
    }
}
