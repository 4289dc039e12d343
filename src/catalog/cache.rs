//! Album list disk cache.
//!
//! Persists the last successful search response per term so results survive
//! going offline. One JSON file per key under the cache directory.
//!
//! The logical key is `albumList_<term>` with the term used verbatim - no
//! trimming, no case folding, no encoding. Two terms collide only when they
//! are the same string; differing case or whitespace are distinct keys. The
//! key is hashed (SHA-256, hex) to form the filename so arbitrary terms map
//! to valid paths without changing those collision semantics.
//!
//! Entries never expire and are never evicted; an entry lives until it is
//! overwritten by a newer fetch for the same term or the cache is cleared.

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use super::dto::AlbumListResponse;
use super::error::CacheError;

/// Key namespace for album list entries.
const KEY_PREFIX: &str = "albumList_";

/// Disk-backed key-value cache for search responses.
pub struct AlbumCache {
    cache_dir: PathBuf,
}

impl AlbumCache {
    /// Create a new cache in the specified directory.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        let cache_dir = cache_dir.into();
        // Ensure cache directory exists
        let _ = fs::create_dir_all(&cache_dir);
        Self { cache_dir }
    }

    /// Create a cache in the default location (user cache directory).
    pub fn default_location() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("album-scout")
            .join("albums");
        Self::new(cache_dir)
    }

    /// Store a search response under the term's key, overwriting any
    /// previous entry.
    pub fn save(&self, term: &str, response: &AlbumListResponse) -> Result<(), CacheError> {
        let json = serde_json::to_vec(response)?;
        fs::write(self.entry_path(term), json)?;
        Ok(())
    }

    /// Load the cached response for a term.
    ///
    /// `Ok(None)` means the term was never saved - absence is not an error.
    /// `Err` means the entry exists but could not be read or parsed; the
    /// orchestrator decides whether to degrade that to a miss.
    pub fn load(&self, term: &str) -> Result<Option<AlbumListResponse>, CacheError> {
        let path = self.entry_path(term);
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read(&path)?;
        let response = serde_json::from_slice(&data)?;
        Ok(Some(response))
    }

    /// Check whether a term has a cached entry.
    pub fn contains(&self, term: &str) -> bool {
        self.entry_path(term).exists()
    }

    /// Remove all cached entries.
    pub fn clear(&self) -> Result<(), CacheError> {
        if self.cache_dir.exists() {
            for entry in fs::read_dir(&self.cache_dir)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    fs::remove_file(entry.path())?;
                }
            }
        }
        Ok(())
    }

    /// Get the total size of the cache in bytes.
    pub fn size_bytes(&self) -> u64 {
        if !self.cache_dir.exists() {
            return 0;
        }

        fs::read_dir(&self.cache_dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| e.metadata().ok())
                    .map(|m| m.len())
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Number of cached entries.
    pub fn entry_count(&self) -> usize {
        fs::read_dir(&self.cache_dir)
            .map(|entries| entries.filter_map(|e| e.ok()).count())
            .unwrap_or(0)
    }

    /// Directory this cache writes to.
    pub fn location(&self) -> &std::path::Path {
        &self.cache_dir
    }

    /// Full logical key for a term.
    fn cache_key(term: &str) -> String {
        format!("{KEY_PREFIX}{term}")
    }

    /// File path for a term's entry.
    fn entry_path(&self, term: &str) -> PathBuf {
        let digest = Sha256::digest(Self::cache_key(term).as_bytes());
        self.cache_dir.join(format!("{digest:x}.json"))
    }
}
