//! # drinks-net
//!
//! Networking core for a drink-recipe content browser: a generic HTTP
//! request-and-decode client with a cached binary-asset (image) fetch path.
//!
//! ## Overview
//!
//! The crate covers request construction, dispatch, decoding, and image
//! caching — the one part of the surrounding application with non-trivial
//! failure handling and resource-reuse semantics. Presentation, presenters,
//! and bootstrap configuration live elsewhere and consume exactly two
//! operations: [`NetworkClient::request`] and [`NetworkClient::request_image`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use drinks_net::api::DrinkEndpoint;
//! use drinks_net::models::DrinkPage;
//! use drinks_net::NetworkClient;
//! use image::GenericImageView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NetworkClient::builder().api_key("1").build()?;
//!
//!     let page: DrinkPage = client.request(&DrinkEndpoint::Random.endpoint()).await?;
//!     if let Some(url) = page.drinks.first().and_then(|d| d.thumbnail.as_deref()) {
//!         let thumbnail = client.request_image(url).await?;
//!         println!("{}x{}", thumbnail.width(), thumbnail.height());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`endpoint`] | Immutable call descriptors and the task variant |
//! | [`params`] | Query-string parameter encoding |
//! | [`request`] | Request assembly: URL, method, timeout, headers |
//! | [`transport`] | Shared HTTP session and API key |
//! | [`client`] | The network client, its builder, and the image path |
//! | [`cache`] | Content cache trait with memory/null backends |
//! | [`api`] | Typed endpoint catalog for the drink API |
//! | [`models`] | Serde response models |
//! | [`error`] | Request and configuration error taxonomies |

pub mod api;
pub mod cache;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod params;
pub mod request;
pub mod transport;

// Re-export main types for convenience
pub use client::{NetworkClient, NetworkClientBuilder};
pub use endpoint::{Endpoint, Method, Parameters, Task};
pub use error::{ConfigError, NetworkError};
pub use image::DynamicImage;

/// Result type alias for the per-request paths.
pub type Result<T> = std::result::Result<T, NetworkError>;
