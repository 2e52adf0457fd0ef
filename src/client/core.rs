use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ContentCache;
use crate::endpoint::Endpoint;
use crate::error::NetworkError;
use crate::request;
use crate::transport::HttpTransport;

/// Single-shot request/response and image-cache primitive.
///
/// Created once at application startup via [`NetworkClient::builder`] and
/// shared for the process lifetime; cloning is cheap and every clone uses the
/// same transport session and content cache. Concurrent calls need no
/// external synchronization.
#[derive(Clone)]
pub struct NetworkClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) cache: Arc<dyn ContentCache>,
    pub(crate) request_timeout: Duration,
}

impl std::fmt::Debug for NetworkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkClient")
            .field("cache", &self.cache.name())
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl NetworkClient {
    pub fn builder() -> crate::client::builder::NetworkClientBuilder {
        crate::client::builder::NetworkClientBuilder::new()
    }

    /// Fetch `endpoint` and decode the JSON body into `T`.
    ///
    /// Resolves exactly once, with the first failure on this ladder:
    /// request construction, transport, absent body ([`NetworkError::Unknown`]),
    /// schema decode. HTTP status is not interpreted — an error page that
    /// fails schema decoding surfaces as a decoding failure, matching the
    /// no-retry, no-partial-result contract.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, NetworkError> {
        let request = request::build(endpoint, self.transport.api_key(), self.request_timeout)?;
        debug!(method = %request.method(), url = %request.url(), "dispatching API request");

        let response = self.transport.execute(request).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(NetworkError::Unknown);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The content cache backing the image path.
    pub fn cache(&self) -> &Arc<dyn ContentCache> {
        &self.cache
    }
}
