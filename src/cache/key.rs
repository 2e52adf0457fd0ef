//! Cache key generation.

use reqwest::Method;
use url::Url;

/// Exact request identity: method plus URL. Headers play no part in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub method: Method,
    pub url: Url,
}

impl AssetKey {
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url }
    }

    /// Key for a plain GET of `url`, the shape every image fetch uses.
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn for_request(request: &reqwest::Request) -> Self {
        Self::new(request.method().clone(), request.url().clone())
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
