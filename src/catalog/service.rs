//! Catalog service - orchestrates fetch, write-through caching, and the
//! offline fallback.
//!
//! Resolution order for a search term:
//! 1. Probe connectivity (point-in-time; the answer can go stale mid-flight).
//! 2. Connected: fetch from the network. Success is written through to the
//!    cache (best-effort) and returned. Failure falls back to the cache for
//!    that exact term; with nothing cached, the fetch error propagates.
//! 3. Offline: serve the cache, or fail with [`CatalogError::NoData`].
//!
//! Every data-bearing path favors availability over freshness, and callers
//! cannot tell a fresh response from a cached one.

use crate::config::Config;

use super::cache::AlbumCache;
use super::client::CatalogClient;
use super::connectivity::{Connectivity, TcpProbe};
use super::dto::AlbumListResponse;
use super::error::CatalogError;
use super::traits::CatalogApi;

/// Fetch orchestrator over a catalog API, a disk cache, and a
/// connectivity probe.
pub struct CatalogService<A, C> {
    api: A,
    cache: AlbumCache,
    connectivity: C,
}

/// The production service wiring.
pub type DefaultCatalogService = CatalogService<CatalogClient, TcpProbe>;

impl DefaultCatalogService {
    /// Build the production service from config: HTTP client against the
    /// configured base URL, cache in the default location, TCP probe
    /// against the catalog host.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CatalogClient::new(&config.api.base_url),
            AlbumCache::default_location(),
            TcpProbe::for_base_url(&config.api.base_url),
        )
    }
}

impl<A: CatalogApi, C: Connectivity> CatalogService<A, C> {
    /// Assemble a service from its parts.
    pub fn new(api: A, cache: AlbumCache, connectivity: C) -> Self {
        Self {
            api,
            cache,
            connectivity,
        }
    }

    /// Resolve a search term to a response, fresh or cached.
    pub async fn resolve(&self, term: &str) -> Result<AlbumListResponse, CatalogError> {
        if !self.connectivity.is_connected() {
            tracing::info!("Offline, serving cached results for {:?}", term);
            return self.load_cached(term).ok_or(CatalogError::NoData);
        }

        match self.api.search(term).await {
            Ok(fresh) => {
                // Best-effort write-through; a full disk must not fail the fetch
                if let Err(e) = self.cache.save(term, &fresh) {
                    tracing::warn!("Failed to cache results for {:?}: {}", term, e);
                }
                Ok(fresh)
            }
            Err(fetch_err) => match self.load_cached(term) {
                Some(stale) => {
                    tracing::warn!(
                        "Fetch failed for {:?} ({}), serving stale cached results",
                        term,
                        fetch_err
                    );
                    Ok(stale)
                }
                None => Err(fetch_err),
            },
        }
    }

    /// Cache read with the swallow policy applied: a storage or parse
    /// failure is logged and degraded to a miss.
    fn load_cached(&self, term: &str) -> Option<AlbumListResponse> {
        match self.cache.load(term) {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!("Failed to load cache for {:?}: {}", term, e);
                None
            }
        }
    }

    /// Access the underlying cache (for the cache CLI subcommands).
    pub fn cache(&self) -> &AlbumCache {
        &self.cache
    }
}
