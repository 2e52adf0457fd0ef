//! Content cache for binary image assets.
//!
//! JSON responses are never cached; only the image path goes through this
//! store. Entries are keyed by exact request identity (method + URL) and hold
//! the raw fetched bytes plus the response metadata needed for validation.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ContentCache`] | Trait for pluggable cache backends |
//! | [`MemoryCache`] | Bounded in-memory LRU, the application default |
//! | [`NullCache`] | No-op backend for disabling caching |
//! | [`AssetKey`] | Request-identity cache key |
//! | [`CachedAsset`] | Raw bytes + response metadata |
//!
//! The cache gate in the client populates entries only after a successful
//! fetch and decode; eviction belongs entirely to the backend.

mod backend;
mod key;

pub use backend::{CachedAsset, ContentCache, MemoryCache, NullCache};
pub use key::AssetKey;
