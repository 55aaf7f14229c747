//! Shared types for DineDash
//!
//! Wire models mirrored from the DineDash REST API, auth DTOs, error codes
//! and money helpers. Used by both `dinedash-client` and `dinedash-app`.

pub mod client;
pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::ErrorCode;
