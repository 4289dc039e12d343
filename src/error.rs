//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`CatalogError`], [`CacheError`]) for detailed
//!   handling; cache errors are absorbed at the orchestration layer and only
//!   appear here when surfaced deliberately (explicit `cache clear`)
//! - All errors implement `std::error::Error` for compatibility

use crate::catalog::{CacheError, CatalogError};

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog fetch/resolve error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cache storage error (only surfaced for explicit cache operations)
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// JSON serialization error (CLI output)
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing base URL");
        assert!(err.to_string().contains("missing base URL"));
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::NoData.into();
        assert!(err.to_string().contains("No internet connection"));
    }
}
