//! DineDash Client - typed HTTP client for the DineDash REST API
//!
//! Network calls go through [`NetworkHttpClient`] (reqwest); with the
//! `in-process` feature an axum `Router` can be driven directly through
//! `OneshotHttpClient`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::{DineDashClient, HttpClient, NetworkHttpClient, path_with_query, query_value};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, MessageResponse, SignupRequest, TokenResponse};
