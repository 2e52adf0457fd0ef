use std::sync::Arc;
use std::time::Duration;

use crate::cache::{ContentCache, MemoryCache};
use crate::client::core::NetworkClient;
use crate::error::ConfigError;
use crate::request::REQUEST_TIMEOUT;
use crate::transport::HttpTransport;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable: an API key, an optional
/// cache backend, and a timeout override for tests against mock servers.
pub struct NetworkClientBuilder {
    api_key: Option<String>,
    cache: Option<Arc<dyn ContentCache>>,
    request_timeout: Duration,
}

impl NetworkClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            cache: None,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Set the API key. Without one, `build` falls back to the
    /// `DRINKS_API_KEY` environment variable.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Inject a content cache backend. Default is a bounded in-memory LRU.
    pub fn cache(mut self, cache: Arc<dyn ContentCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the fixed per-request deadline.
    ///
    /// Primarily for tests with mock servers; production callers keep the
    /// default.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the client. Fails with [`ConfigError`] — the construction-time
    /// class, distinct from per-request failures — when no API key can be
    /// resolved or the transport session cannot be created.
    pub fn build(self) -> Result<NetworkClient, ConfigError> {
        let transport = Arc::new(HttpTransport::new(self.api_key)?);
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MemoryCache::default()));

        Ok(NetworkClient {
            transport,
            cache,
            request_timeout: self.request_timeout,
        })
    }
}

impl Default for NetworkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
