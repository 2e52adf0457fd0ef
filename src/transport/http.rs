use std::env;
use std::time::Duration;

use crate::error::{ConfigError, NetworkError};

/// Environment variable consulted when the builder carries no explicit key.
pub const API_KEY_VAR: &str = "DRINKS_API_KEY";

/// Shared transport session: a pooled `reqwest::Client` plus the API key.
///
/// The underlying client supports concurrent in-flight requests without
/// external synchronization, so the core adds no locking of its own.
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    /// Create the session. `api_key` falls back to [`API_KEY_VAR`]; a missing
    /// key is a configuration defect, reported here and never per-request.
    pub fn new(api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .or_else(|| env::var(API_KEY_VAR).ok())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        // Minimal production-friendly pool defaults (env-overridable).
        let pool_max_idle = env::var("DRINKS_HTTP_POOL_MAX_IDLE_PER_HOST")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(8);
        let pool_idle_timeout = env::var("DRINKS_HTTP_POOL_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(90);

        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(pool_max_idle)
            .pool_idle_timeout(Some(Duration::from_secs(pool_idle_timeout)))
            .build()
            .map_err(|e| ConfigError::Session(e.to_string()))?;

        Ok(Self { client, api_key })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Perform one transport call. Connectivity and timeout failures pass
    /// through verbatim as [`NetworkError::Transport`].
    pub async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, NetworkError> {
        Ok(self.client.execute(request).await?)
    }
}
