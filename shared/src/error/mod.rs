//! Error codes shared by the DineDash client and app
//!
//! [`ErrorCode`] is the numeric code attached to every failure surfaced to
//! the user. The REST API only returns `{"detail": ...}`, so codes are
//! assigned client-side: from validation checks in the app, or from the HTTP
//! status via [`ErrorCode::from_http_status`].
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Restaurant errors
//! - 4xxx: Order errors
//! - 6xxx: Reservation errors
//! - 9xxx: System errors

mod codes;
mod http;

pub use codes::ErrorCode;
