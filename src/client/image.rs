//! Image fetch path: cache gate in front of the transport.

use image::DynamicImage;
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::cache::{AssetKey, CachedAsset};
use crate::client::core::NetworkClient;
use crate::error::NetworkError;

impl NetworkClient {
    /// Fetch and decode the image at `url`, consulting the content cache
    /// first.
    ///
    /// A cache hit never initiates a network operation. On a miss, bytes are
    /// stored — together with the response's validation headers — only after
    /// they decode into a valid image, and before this call resolves, so an
    /// immediately following request for the same URL is guaranteed a hit.
    /// A failed fetch or decode leaves the cache untouched.
    pub async fn request_image(&self, url: &str) -> Result<DynamicImage, NetworkError> {
        let url = Url::parse(url).map_err(|_| NetworkError::MissingUrl)?;
        let key = AssetKey::get(url.clone());

        if let Some(asset) = self.cache.lookup(&key).await {
            match image::load_from_memory(&asset.bytes) {
                Ok(decoded) => {
                    debug!(key = %key, "image served from cache");
                    return Ok(decoded);
                }
                // Stale or truncated entry; fall through to a fresh fetch.
                Err(_) => warn!(key = %key, "cached image bytes failed to decode"),
            }
        }

        let mut request = reqwest::Request::new(Method::GET, url);
        *request.timeout_mut() = Some(self.request_timeout);
        debug!(key = %key, "image cache miss, downloading");

        let response = self.transport.execute(request).await?;
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        let decoded = image::load_from_memory(&bytes).map_err(|_| NetworkError::Unknown)?;
        self.cache
            .store(&key, CachedAsset::from_response_parts(bytes, &headers))
            .await;
        Ok(decoded)
    }
}
