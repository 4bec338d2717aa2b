//! In-memory TTL cache - backs the page cache on the global feed.
//!
//! Entries expire by their own TTL only; writes elsewhere in the system never
//! invalidate them, so a cached feed page can lag new posts until expiry.
//! Contents are lost on process restart.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::{Cache, CacheError};

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| Instant::now() > deadline)
    }
}

/// HashMap-backed cache behind an async RwLock.
#[derive(Default)]
pub struct InMemoryCache {
    store: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        {
            let store = self.store.read().await;
            let entry = store.get(key)?;
            if !entry.is_expired() {
                return Some(entry.value.clone());
            }
        }

        // Expired; drop the entry under a write lock.
        self.store.write().await.remove(key);
        None
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: ttl.map(|d| Instant::now() + d),
        };

        self.store.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();
        cache.set("feed:index:1", "body", None).await.unwrap();
        assert_eq!(cache.get("feed:index:1").await, Some("body".to_string()));
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = InMemoryCache::new();
        cache.set("feed:index:1", "body", None).await.unwrap();
        cache.delete("feed:index:1").await.unwrap();
        assert_eq!(cache.get("feed:index:1").await, None);
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let cache = InMemoryCache::new();
        cache
            .set("feed:index:1", "stale", Some(Duration::from_millis(10)))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("feed:index:1").await, None);
        assert!(!cache.exists("feed:index:1").await);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_ttl() {
        let cache = InMemoryCache::new();
        cache
            .set("feed:index:1", "old", Some(Duration::from_millis(10)))
            .await
            .unwrap();
        cache.set("feed:index:1", "new", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("feed:index:1").await, Some("new".to_string()));
    }
}
