//! Client module - transports and the typed API client.
//!
//! [`DineDashClient`] is generic over an [`HttpClient`] transport:
//! [`NetworkHttpClient`] talks to a real backend, `OneshotHttpClient`
//! (feature `in-process`) calls an axum `Router` in memory.

pub(crate) mod common;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use common::{DineDashClient, path_with_query, query_value};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
