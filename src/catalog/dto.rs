//! Catalog API response shapes.
//!
//! These types match what the catalog search endpoint returns
//! (`GET <base>/search?term=...`). They double as the cache value format:
//! a successful response is stored as serialized JSON and deserialized back
//! on a cache hit, so the wire shape and the cached shape never diverge.
//!
//! `result_count` is reported by the API and is NOT reconciled against
//! `results.len()` - the two may disagree and this layer does not care.

use serde::{Deserialize, Serialize};

/// Search response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumListResponse {
    /// Result count as reported by the API (not validated against `results`)
    pub result_count: u32,
    /// Matching catalog items, in API order
    pub results: Vec<AlbumResult>,
}

impl AlbumListResponse {
    /// The empty response - initial state and the value after a clear.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A single catalog item (track or collection).
///
/// Most fields are optional; the required subset below is what the API
/// guarantees for music search results. No uniqueness is enforced on
/// `track_id` - duplicates are the presentation layer's problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResult {
    pub wrapper_type: String,
    pub kind: String,
    pub artist_id: Option<u64>,
    pub collection_id: Option<u64>,
    pub track_id: Option<u64>,
    pub artist_name: String,
    pub collection_name: Option<String>,
    pub track_name: String,
    pub collection_censored_name: Option<String>,
    pub track_censored_name: Option<String>,
    pub artist_view_url: Option<String>,
    pub collection_view_url: Option<String>,
    pub track_view_url: String,
    pub preview_url: Option<String>,
    pub artwork_url30: Option<String>,
    pub artwork_url60: String,
    pub artwork_url100: String,
    pub collection_price: Option<f64>,
    pub track_price: Option<f64>,
    pub release_date: String,
    pub collection_explicitness: Option<String>,
    pub track_explicitness: Option<String>,
    pub track_time_millis: Option<u64>,
    pub country: String,
    pub currency: String,
    pub primary_genre_name: String,
    pub content_advisory_rating: Option<String>,
    pub long_description: Option<String>,
    pub short_description: Option<String>,
}

impl AlbumResult {
    /// Display title: collection name, falling back to track name.
    pub fn display_title(&self) -> &str {
        self.collection_name.as_deref().unwrap_or(&self.track_name)
    }
}

/// Error body some upstream failures carry.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}
