//! Network client: the crate's public call surface.
//!
//! Two operations make up the whole contract: [`NetworkClient::request`] for
//! typed JSON resources and [`NetworkClient::request_image`] for cached
//! binary assets. Implementation details are split into submodules under
//! `src/client/`.

pub mod builder;
pub mod core;
mod image;

pub use builder::NetworkClientBuilder;
pub use core::NetworkClient;
