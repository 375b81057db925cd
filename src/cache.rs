//! On-disk cache for API response bodies.
//!
//! One file per logical resource under a single directory, expiring a
//! fixed interval after the write. Writes land in a `.tmp` sibling
//! first and are renamed into place, so an interrupted run never
//! leaves a partial entry behind.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tracing::debug;

/// Default entry lifetime: one day.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache location and expiry, passed in explicitly so callers and
/// tests never share process-global state.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub dir: PathBuf,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".checkpoint-cache"),
            ttl: DEFAULT_TTL,
        }
    }
}

/// File-backed response cache.
#[derive(Debug, Clone)]
pub struct HttpCache {
    config: CacheConfig,
}

impl HttpCache {
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    /// Returns the cached body for `key`, or `None` when the entry is
    /// missing, unreadable, or older than the configured TTL.
    pub fn load(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        let modified = fs::metadata(&path).ok()?.modified().ok()?;
        let age = SystemTime::now().duration_since(modified).ok()?;
        if age >= self.config.ttl {
            debug!("cache entry '{key}' is stale");
            return None;
        }
        fs::read_to_string(&path).ok()
    }

    /// Stores `body` under `key`, creating the cache directory on
    /// first use.
    pub fn store(&self, key: &str, body: &str) -> io::Result<()> {
        fs::create_dir_all(&self.config.dir)?;
        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(tmp, path)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.config.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_in(dir: &tempfile::TempDir, ttl: Duration) -> HttpCache {
        HttpCache::new(CacheConfig {
            dir: dir.path().to_path_buf(),
            ttl,
        })
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = cache_in(&dir, DEFAULT_TTL);
        cache.store("locations", "[{\"id\": 1}]").unwrap();
        assert_eq!(cache.load("locations").as_deref(), Some("[{\"id\": 1}]"));
    }

    #[test]
    fn test_missing_key_is_a_miss() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = cache_in(&dir, DEFAULT_TTL);
        assert_eq!(cache.load("checkpoints-42"), None);
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = cache_in(&dir, Duration::ZERO);
        cache.store("locations", "[]").unwrap();
        assert_eq!(cache.load("locations"), None);
    }

    #[test]
    fn test_store_overwrites_previous_entry() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = cache_in(&dir, DEFAULT_TTL);
        cache.store("locations", "old").unwrap();
        cache.store("locations", "new").unwrap();
        assert_eq!(cache.load("locations").as_deref(), Some("new"));
    }

    #[test]
    fn test_store_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = cache_in(&dir, DEFAULT_TTL);
        cache.store("checkpoints-7", "[]").unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "found {leftovers:?}");
    }

    #[test]
    fn test_keys_do_not_collide() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cache = cache_in(&dir, DEFAULT_TTL);
        cache.store("checkpoints-1", "one").unwrap();
        cache.store("checkpoints-2", "two").unwrap();
        assert_eq!(cache.load("checkpoints-1").as_deref(), Some("one"));
        assert_eq!(cache.load("checkpoints-2").as_deref(), Some("two"));
    }
}
