//! # http-dao
//!
//! A small convenience layer over a blocking HTTP client: a [`Registry`] of
//! named, reusable client configurations ([`HttpDao`]), each bound to a base
//! URL and a set of default headers. A DAO builds verb-specific requests
//! (GET/POST/PUT/DELETE), merges default and per-call headers, and can
//! deserialize JSON response bodies straight into caller-chosen types.
//!
//! ```no_run
//! use http_dao::Registry;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Post {
//!     id: i64,
//!     title: String,
//! }
//!
//! let registry = Registry::new();
//! let api = registry.register_or_get(
//!     "api",
//!     "https://jsonplaceholder.typicode.com",
//!     Default::default(),
//! );
//!
//! let post: Post = api.get_as("/posts/1", None).unwrap();
//! assert_eq!(post.id, 1);
//! ```
//!
//! There is no retry, caching, or timeout policy in this layer; every failure
//! is surfaced to the immediate caller as an [`Error`].

pub mod dao;
pub mod http_client;
pub mod model;
pub mod registry;

pub use crate::dao::HttpDao;
pub use crate::http_client::ClientConfig;
pub use crate::model::{Method, Request, Response, Version};
pub use crate::registry::Registry;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in this layer, in the order it can happen:
/// the request could not be built, the transport failed, or the response body
/// did not decode. Nothing is retried or reclassified.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request target {target:?}: {source}")]
    Build {
        target: String,
        source: url::ParseError,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
