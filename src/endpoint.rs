//! Endpoint descriptors.
//!
//! An [`Endpoint`] is an immutable value describing one API call: base
//! address, relative path, HTTP method, and a [`Task`] variant that fixes the
//! parameter-passing strategy. No validation happens here; a malformed
//! address surfaces as [`crate::NetworkError::MissingUrl`] when the request
//! is assembled.

use std::collections::BTreeMap;

pub use reqwest::Method;

/// Parameter mapping for a [`Task::Parameters`] call.
///
/// Keys are unique; values are JSON scalars. Composite values (arrays,
/// objects) and `null` are rejected by the encoder because they have no
/// query-string representation.
pub type Parameters = BTreeMap<String, serde_json::Value>;

/// How a call carries its inputs.
///
/// Closed and exhaustively matched: a plain call sends an empty body with a
/// JSON content-type header; a parameterized call encodes its mapping as a
/// query string. The two strategies never mix within one request.
#[derive(Debug, Clone)]
pub enum Task {
    /// No parameters; `Content-Type: application/json` and an empty body.
    Plain,
    /// Parameters encoded into the request's query string.
    Parameters(Parameters),
}

/// Immutable description of one API call.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Absolute base address, e.g. `https://www.thecocktaildb.com/api/json/v1`.
    pub base_url: String,
    /// Path relative to the base address and API key segment.
    pub path: String,
    pub method: Method,
    pub task: Task,
}

impl Endpoint {
    pub fn new(
        base_url: impl Into<String>,
        path: impl Into<String>,
        method: Method,
        task: Task,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            method,
            task,
        }
    }

    /// Plain GET endpoint.
    pub fn get(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(base_url, path, Method::GET, Task::Plain)
    }

    /// GET endpoint with query parameters.
    pub fn get_with(
        base_url: impl Into<String>,
        path: impl Into<String>,
        parameters: Parameters,
    ) -> Self {
        Self::new(base_url, path, Method::GET, Task::Parameters(parameters))
    }
}
