//! Cache backend implementations.

use std::num::NonZeroUsize;

use async_trait::async_trait;
use bytes::Bytes;
use lru::LruCache;
use reqwest::header::{HeaderMap, CONTENT_TYPE, ETAG, LAST_MODIFIED};
use tokio::sync::Mutex;

use super::key::AssetKey;

/// Raw response bytes plus the metadata needed for cache validation.
#[derive(Debug, Clone)]
pub struct CachedAsset {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

impl CachedAsset {
    pub fn new(bytes: Bytes) -> Self {
        Self {
            bytes,
            content_type: None,
            etag: None,
            last_modified: None,
        }
    }

    /// Capture the validation headers alongside the body.
    pub fn from_response_parts(bytes: Bytes, headers: &HeaderMap) -> Self {
        let header = |name| {
            headers
                .get(name)
                .and_then(|v: &reqwest::header::HeaderValue| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            bytes,
            content_type: header(CONTENT_TYPE),
            etag: header(ETAG),
            last_modified: header(LAST_MODIFIED),
        }
    }
}

/// Opaque content store keyed by request identity.
///
/// The core treats this as an external dependency: `lookup` and `store` are
/// the whole contract, and capacity/expiry policy belongs to the backend.
/// Injectable so tests substitute an in-memory fake for the network layer.
#[async_trait]
pub trait ContentCache: Send + Sync {
    async fn lookup(&self, key: &AssetKey) -> Option<CachedAsset>;
    async fn store(&self, key: &AssetKey, asset: CachedAsset);
    async fn len(&self) -> usize;
    async fn clear(&self);
    fn name(&self) -> &'static str;
}

/// Bounded in-memory LRU backend; the application default.
pub struct MemoryCache {
    entries: Mutex<LruCache<AssetKey, CachedAsset>>,
}

/// Entry bound chosen for a screenful-scale image browser, not a CDN.
const DEFAULT_CAPACITY: usize = 128;

impl MemoryCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl ContentCache for MemoryCache {
    async fn lookup(&self, key: &AssetKey) -> Option<CachedAsset> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn store(&self, key: &AssetKey, asset: CachedAsset) {
        self.entries.lock().await.put(key.clone(), asset);
    }

    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// No-op backend: every lookup misses, every store is discarded.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentCache for NullCache {
    async fn lookup(&self, _: &AssetKey) -> Option<CachedAsset> {
        None
    }

    async fn store(&self, _: &AssetKey, _: CachedAsset) {}

    async fn len(&self) -> usize {
        0
    }

    async fn clear(&self) {}

    fn name(&self) -> &'static str {
        "null"
    }
}
