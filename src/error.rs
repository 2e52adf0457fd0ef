use thiserror::Error;

/// Per-request failure taxonomy.
///
/// Every call through [`crate::NetworkClient`] resolves with exactly one of
/// these, or a success value. Nothing is swallowed and nothing is retried
/// internally; transport and decoding failures pass through verbatim.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request address could not be parsed or assembled.
    #[error("request URL could not be assembled")]
    MissingUrl,

    /// A parameter value has no query-string representation.
    #[error("parameter `{key}` cannot be encoded as a query value")]
    ParameterEncodingFailed { key: String },

    /// The transport settled without a usable body, or fetched bytes did not
    /// decode into a valid image.
    #[error("response carried no usable body")]
    Unknown,

    /// Connectivity, TLS, or timeout failure from the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not conform to the caller-declared schema.
    #[error("response decoding error: {0}")]
    Decoding(#[from] serde_json::Error),
}

/// Construction-time configuration failures.
///
/// Kept as a separate type from [`NetworkError`]: a bad configuration is a
/// deployment defect surfaced once at client construction, never as a
/// per-request fault.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was supplied and the `DRINKS_API_KEY` environment variable
    /// is unset.
    #[error("no API key configured (pass one to the builder or set DRINKS_API_KEY)")]
    MissingApiKey,

    /// The transport session could not be created.
    #[error("transport session could not be created: {0}")]
    Session(String),
}
