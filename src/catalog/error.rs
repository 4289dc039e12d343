//! Catalog error types.
//!
//! Two families with different propagation policies:
//! - [`CatalogError`]: fetch/resolve failures, surfaced to the caller
//! - [`CacheError`]: storage failures, absorbed by the orchestrator and
//!   degraded to "no cached value" (caching is an optimization, not a
//!   correctness requirement)

/// Fallback message when an upstream failure carries no message of its own.
pub const GENERIC_FETCH_FAILURE: &str = "Album fetch failed";

/// Message for the offline-with-empty-cache dead end.
pub const NO_DATA_MESSAGE: &str = "No internet connection and no cached data available";

/// Errors surfaced by the fetcher and the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP response; carries the upstream message if present
    #[error("{0}")]
    Api(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Offline and nothing cached for the term
    #[error("{NO_DATA_MESSAGE}")]
    NoData,
}

/// Errors from the cache store. Never reach the orchestrator's caller.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
