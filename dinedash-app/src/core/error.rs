//! Application error type
//!
//! Every page operation returns [`AppResult`]. Failures carry an
//! [`ErrorCode`] for logs and a short message for the notification toast.

use dinedash_client::ClientError;
use shared::error::ErrorCode;
use shared::http::StatusCode;
use shared::models::UserRole;
use thiserror::Error;

use super::storage::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Backend or transport failure
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Local storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// No session, a session of another role is required
    #[error("Please login as {}", .0)]
    LoginRequired(UserRole),

    /// Logged in, but with the wrong role
    #[error("{0}")]
    Forbidden(String),

    /// Client-side validation failed before any request was sent
    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(code: ErrorCode) -> Self {
        Self::Validation {
            code,
            message: code.message().to_string(),
        }
    }

    pub fn validation_msg(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Numeric error code for display and logs
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Client(e) => client_error_to_code(e),
            Self::Storage(_) => ErrorCode::StorageError,
            Self::LoginRequired(_) => ErrorCode::NotAuthenticated,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::Validation { code, .. } => *code,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Backend detail when present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Client(e) => e
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            other => other.to_string(),
        }
    }

    /// Whether the user should be sent to a login page
    ///
    /// A `401` from the backend means the stored token was rejected; the
    /// caller decides which login route applies.
    pub fn requires_login(&self) -> bool {
        match self {
            Self::LoginRequired(_) => true,
            Self::Client(e) => e.is_unauthorized(),
            _ => false,
        }
    }
}

/// Map ClientError to the most specific ErrorCode
fn client_error_to_code(err: &ClientError) -> ErrorCode {
    match err {
        ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
        ClientError::Http(_) => ErrorCode::NetworkError,
        ClientError::Unauthorized(_) => ErrorCode::NotAuthenticated,
        ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
        ClientError::NotFound(_) => ErrorCode::NotFound,
        ClientError::Validation(_) => ErrorCode::ValidationFailed,
        ClientError::InvalidRequest(_) => ErrorCode::InvalidRequest,
        ClientError::Server { status, .. } => StatusCode::from_u16(*status)
            .map(ErrorCode::from_http_status)
            .unwrap_or(ErrorCode::InternalError),
        ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
            ErrorCode::InvalidResponse
        }
        ClientError::Internal(_) => ErrorCode::InternalError,
    }
}

pub type AppResult<T> = Result<T, AppError>;
