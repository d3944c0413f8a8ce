//! Flat-file JSON caching keyed by normalized artist name.
//!
//! The store is a plain key-to-blob interface with no TTL or invalidation;
//! a cache hit always short-circuits re-analysis. File-backed for the CLI,
//! in-memory for tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Normalize an artist name into a cache key: lowercase, spaces to
/// underscores.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Simple key-to-blob store for persisted JSON values.
pub trait CacheStore {
    /// Fetch the blob stored under a key, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a blob under a key, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Fetch and deserialize a cached JSON value.
pub fn get_json<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Result<Option<T>> {
    let Some(blob) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&blob)
        .map_err(|e| Error::parse(format!("cache entry {key}"), e.to_string()))?;
    Ok(Some(value))
}

/// Serialize and store a JSON value.
pub fn put_json<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T) -> Result<()> {
    let blob = serde_json::to_string_pretty(value)
        .map_err(|e| Error::parse(format!("cache entry {key}"), e.to_string()))?;
    store.put(key, &blob)
}

/// Cache store backed by one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a file cache rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CacheStore for FileCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs_err::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(e, path)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs_err::create_dir_all(&self.dir).map_err(|e| Error::io(e, self.dir.clone()))?;
        let path = self.path_for(key);
        fs_err::write(&path, value).map_err(|e| Error::io(e, path))
    }
}

/// In-memory cache store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|e| Error::Msg(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|e| Error::Msg(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn keys_normalize_to_lowercase_underscores() {
        assert_eq!(normalize_key("Taylor Swift"), "taylor_swift");
        assert_eq!(normalize_key("MF DOOM"), "mf_doom");
        assert_eq!(normalize_key("prince"), "prince");
    }

    #[test]
    fn file_cache_round_trips_blobs() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("profiles"));

        assert!(cache.get("someone").unwrap().is_none());
        cache.put("someone", "{\"x\":1}").unwrap();
        assert_eq!(cache.get("someone").unwrap().as_deref(), Some("{\"x\":1}"));
    }

    #[test]
    fn file_cache_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path().to_path_buf());

        cache.put("k", "old").unwrap();
        cache.put("k", "new").unwrap();
        assert_eq!(cache.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn json_helpers_round_trip_typed_values() {
        let cache = MemoryCache::new();
        put_json(&cache, "nums", &vec![1u32, 2, 3]).unwrap();
        let back: Option<Vec<u32>> = get_json(&cache, "nums").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn json_helper_surfaces_parse_errors() {
        let cache = MemoryCache::new();
        cache.put("bad", "not json").unwrap();
        let result: Result<Option<Vec<u32>>> = get_json(&cache, "bad");
        assert!(result.is_err());
    }
}
