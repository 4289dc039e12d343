//! Request state container for the album list.
//!
//! Tracks exactly one logical request as `{data, loading, error}` and runs
//! the fetch through the catalog service. The presentation layer reads
//! snapshots and calls [`AlbumListStore::trigger`] / [`AlbumListStore::clear`].
//!
//! Overlapping triggers are allowed: nothing is cancelled, every in-flight
//! request runs to completion, and whichever settles last overwrites the
//! visible state. That is last-SETTLED-wins, not last-issued-wins, and it is
//! pinned by a regression test rather than fixed with request sequence
//! numbers.

use parking_lot::Mutex;

use crate::catalog::connectivity::TcpProbe;
use crate::catalog::{
    AlbumListResponse, CatalogApi, CatalogClient, CatalogError, CatalogService, Connectivity,
};
use crate::config::Config;

/// Snapshot of the current request lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    /// Last settled successful response; empty until the first success
    pub data: AlbumListResponse,
    /// Whether a request is in flight
    pub loading: bool,
    /// Message from the last settled failure, if the failure was last
    pub error: Option<String>,
}

/// State container owning the catalog service and the visible request state.
///
/// Constructed once at process start and shared by reference with whatever
/// owns the UI binding.
pub struct AlbumListStore<A, C> {
    service: CatalogService<A, C>,
    state: Mutex<RequestState>,
}

/// The production store wiring.
pub type DefaultAlbumListStore = AlbumListStore<CatalogClient, TcpProbe>;

impl DefaultAlbumListStore {
    /// Build the production store from config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CatalogService::from_config(config))
    }
}

impl<A: CatalogApi, C: Connectivity> AlbumListStore<A, C> {
    /// Wrap a catalog service in a fresh (idle, empty) state container.
    pub fn new(service: CatalogService<A, C>) -> Self {
        Self {
            service,
            state: Mutex::new(RequestState::default()),
        }
    }

    /// Run a search and drive the state through the request lifecycle.
    ///
    /// Pending: `loading = true`, `error = None`. On success the response
    /// becomes `data`; on failure `error` carries the message and `data`
    /// is left as it was. The outcome is also returned to the caller.
    pub async fn trigger(&self, term: &str) -> Result<AlbumListResponse, CatalogError> {
        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let outcome = self.service.resolve(term).await;

        let mut state = self.state.lock();
        state.loading = false;
        match &outcome {
            Ok(response) => {
                state.data = response.clone();
                state.error = None;
            }
            Err(e) => {
                state.error = Some(e.to_string());
            }
        }

        outcome
    }

    /// Reset `data` to the empty response and drop any error.
    ///
    /// Does not touch `loading`; an in-flight request keeps running and
    /// will overwrite the state when it settles.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.data = AlbumListResponse::empty();
        state.error = None;
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> RequestState {
        self.state.lock().clone()
    }

    /// The underlying service (cache access for the CLI).
    pub fn service(&self) -> &CatalogService<A, C> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::traits::mocks::{DelayedCatalog, FixedConnectivity, MockCatalog};
    use crate::catalog::AlbumCache;
    use crate::test_utils::sample_response;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;

    fn store_with<A: CatalogApi>(api: A, temp: &TempDir) -> AlbumListStore<A, FixedConnectivity> {
        AlbumListStore::new(CatalogService::new(
            api,
            AlbumCache::new(temp.path()),
            FixedConnectivity(true),
        ))
    }

    #[tokio::test]
    async fn test_initial_state_is_idle_and_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_with(MockCatalog::succeeding(sample_response(&[])), &temp);

        let state = store.snapshot();
        assert_eq!(state.data, AlbumListResponse::empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_state_while_in_flight() {
        let temp = TempDir::new().unwrap();
        let api = DelayedCatalog::new().respond_after(
            "slow",
            Duration::from_millis(100),
            sample_response(&["A"]),
        );
        let store = Arc::new(store_with(api, &temp));

        let task = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.trigger("slow").await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        let state = store.snapshot();
        assert!(state.loading);
        assert_eq!(state.error, None);

        task.await.unwrap().unwrap();
        assert!(!store.snapshot().loading);
    }

    #[tokio::test]
    async fn test_success_settles_fulfilled() {
        let temp = TempDir::new().unwrap();
        let response = sample_response(&["Upside Down"]);
        let store = store_with(MockCatalog::succeeding(response.clone()), &temp);

        let returned = store.trigger("jack johnson").await.unwrap();

        let state = store.snapshot();
        assert_eq!(returned, response);
        assert_eq!(state.data, response);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_data() {
        let temp = TempDir::new().unwrap();
        let good = sample_response(&["Upside Down"]);
        let api = DelayedCatalog::new().respond_after("good", Duration::ZERO, good.clone());
        let store = store_with(api, &temp);

        store.trigger("good").await.unwrap();
        let err = store.trigger("bad").await.unwrap_err();

        let state = store.snapshot();
        assert_eq!(state.error, Some(err.to_string()));
        assert!(!state.loading);
        // Rejection does not reset data
        assert_eq!(state.data, good);
    }

    #[tokio::test]
    async fn test_offline_failure_surfaces_no_data_message() {
        let temp = TempDir::new().unwrap();
        let store = AlbumListStore::new(CatalogService::new(
            MockCatalog::failing("unused"),
            AlbumCache::new(temp.path()),
            FixedConnectivity(false),
        ));

        store.trigger("anything").await.unwrap_err();

        assert_eq!(
            store.snapshot().error,
            Some("No internet connection and no cached data available".to_string())
        );
    }

    #[tokio::test]
    async fn test_clear_resets_data_and_error_only() {
        let temp = TempDir::new().unwrap();
        let good = sample_response(&["Upside Down"]);
        let api = DelayedCatalog::new().respond_after("good", Duration::ZERO, good);
        let store = store_with(api, &temp);

        store.trigger("good").await.unwrap();
        store.trigger("bad").await.unwrap_err();
        store.clear();

        let state = store.snapshot();
        assert_eq!(state.data, AlbumListResponse::empty());
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_triggers_last_settled_wins() {
        let temp = TempDir::new().unwrap();
        let slow_a = sample_response(&["From A"]);
        let fast_b = sample_response(&["From B"]);
        let api = DelayedCatalog::new()
            .respond_after("A", Duration::from_millis(100), slow_a.clone())
            .respond_after("B", Duration::from_millis(10), fast_b);
        let store = Arc::new(store_with(api, &temp));

        // A is issued first but settles last; B settles first.
        let a = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.trigger("A").await }
        });
        let b = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.trigger("B").await }
        });

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        // Last-settled-wins: the visible state is A's outcome even though B
        // was issued later. Accepted behavior, pinned here on purpose.
        assert_eq!(store.snapshot().data, slow_a);
    }
}
