//! Test fixtures shared across module tests.

use crate::catalog::{AlbumListResponse, AlbumResult};

/// A realistic catalog item with the required fields filled in.
///
/// Customize with struct update syntax:
///
/// ```ignore
/// let album = AlbumResult {
///     track_price: Some(0.99),
///     ..sample_album("Upside Down")
/// };
/// ```
pub fn sample_album(track_name: &str) -> AlbumResult {
    AlbumResult {
        wrapper_type: "track".to_string(),
        kind: "song".to_string(),
        artist_id: Some(909253),
        collection_id: Some(879273552),
        track_id: Some(879273565),
        artist_name: "Jack Johnson".to_string(),
        collection_name: None,
        track_name: track_name.to_string(),
        collection_censored_name: None,
        track_censored_name: None,
        artist_view_url: None,
        collection_view_url: None,
        track_view_url: format!("https://itunes.apple.com/track/{track_name}"),
        preview_url: None,
        artwork_url30: None,
        artwork_url60: "https://img.example/60.jpg".to_string(),
        artwork_url100: "https://img.example/100.jpg".to_string(),
        collection_price: None,
        track_price: Some(1.29),
        release_date: "2006-02-01T08:00:00Z".to_string(),
        collection_explicitness: Some("notExplicit".to_string()),
        track_explicitness: Some("notExplicit".to_string()),
        track_time_millis: Some(208643),
        country: "USA".to_string(),
        currency: "USD".to_string(),
        primary_genre_name: "Rock".to_string(),
        content_advisory_rating: None,
        long_description: None,
        short_description: None,
    }
}

/// A response holding one sample album per track name.
///
/// `result_count` mirrors the item count here, but nothing relies on that.
pub fn sample_response(track_names: &[&str]) -> AlbumListResponse {
    AlbumListResponse {
        result_count: track_names.len() as u32,
        results: track_names.iter().map(|name| sample_album(name)).collect(),
    }
}
