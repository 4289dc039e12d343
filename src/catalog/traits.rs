//! Trait seam for the catalog search API.
//!
//! Production code uses [`CatalogClient`](super::client::CatalogClient);
//! tests substitute mock implementations to drive the orchestrator through
//! its offline/degraded paths without a network.

use async_trait::async_trait;

use super::client::CatalogClient;
use super::dto::AlbumListResponse;
use super::error::CatalogError;

/// Catalog search operation.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search the catalog for a term.
    async fn search(&self, term: &str) -> Result<AlbumListResponse, CatalogError>;
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn search(&self, term: &str) -> Result<AlbumListResponse, CatalogError> {
        self.search(term).await
    }
}
