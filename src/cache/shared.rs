//! Shared Cache Handle
//!
//! Thread-safe handle to a single [`CacheStore`], cloned into every
//! connection handler.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

/// Cloneable handle to a process-wide cache store.
///
/// Every get/put/invalidate takes the write lock: gets update recency, so no
/// cache operation is a pure read. Operations from different connections
/// are serialized one at a time; values are copied in and out, so a reader
/// never observes a partially written value.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedCache {
    /// Wraps an existing store.
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Builds a store of the given capacity and wraps it.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::new(CacheStore::new(capacity)?))
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.write().await.get(key)
    }

    pub async fn put(&self, key: String, value: String) {
        self.inner.write().await.put(key, value);
    }

    pub async fn invalidate(&self, key: &str) {
        self.inner.write().await.invalidate(key);
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.inner.read().await.contains(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}
