//! Transport session.
//!
//! One [`HttpTransport`] is created at client construction and shared for the
//! process lifetime. It owns the pooled HTTP session and the configured API
//! key; both are read-only after construction.

mod http;

pub use http::HttpTransport;
