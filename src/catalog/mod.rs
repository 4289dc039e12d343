//! Catalog module - searches the public music catalog and keeps results
//! available offline.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - Exact API response shapes; also the cache value
//!   format
//! - **Client** (`client.rs`) - HTTP client for the search endpoint
//! - **Cache** (`cache.rs`) - Per-term disk cache of the last successful
//!   response
//! - **Connectivity** (`connectivity.rs`) - Point-in-time reachability probe
//! - **Service** (`service.rs`) - Orchestrates fetch, write-through, and
//!   the offline fallback
//! - **Traits** (`traits.rs`) - Seam for substituting the API in tests
//!
//! # Usage
//!
//! ```ignore
//! use album_scout::catalog::DefaultCatalogService;
//!
//! let service = DefaultCatalogService::from_config(&config);
//! let albums = service.resolve("jack johnson").await?;
//! println!("{} results", albums.result_count);
//! ```

pub mod cache;
pub mod client;
pub mod connectivity;
pub mod dto;
pub mod error;
pub mod service;
pub mod traits;

pub use cache::AlbumCache;
pub use client::CatalogClient;
pub use connectivity::{Connectivity, TcpProbe};
pub use dto::{AlbumListResponse, AlbumResult};
pub use error::{CacheError, CatalogError};
pub use service::{CatalogService, DefaultCatalogService};
pub use traits::CatalogApi;
