//! Page view-models
//!
//! Each page loads its data through [`AppState`]. Operations return
//! [`AppResult`](crate::core::AppResult); failures have already been pushed
//! to the notifier, except login redirects which the caller turns into a
//! [`Navigation`] with [`Navigation::for_error`].

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod favorites;
pub mod home;
pub mod payment;
pub mod profile;
pub mod restaurant;
pub mod restaurant_dashboard;
pub mod tracking;

use dinedash_client::HttpClient;
use shared::models::UserRole;

use crate::core::{AppError, AppState, Route};

/// Where the user goes after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    To(Route),
    /// Hosted page outside the app (payment provider)
    External(String),
}

impl Navigation {
    pub fn login(role: &UserRole) -> Self {
        Self::To(Route::login_for(role))
    }

    /// Login redirect implied by a failure
    ///
    /// `role` picks the login page when the backend rejected the token.
    pub fn for_error(err: &AppError, role: &UserRole) -> Option<Self> {
        match err {
            AppError::LoginRequired(required) => Some(Self::login(required)),
            e if e.requires_login() => Some(Self::login(role)),
            _ => None,
        }
    }
}

/// Notify a failure (login redirects excepted) and hand it back
pub(crate) fn reported<H: HttpClient>(
    state: &AppState<H>,
    err: impl Into<AppError>,
    fallback: &str,
) -> AppError {
    let err = err.into();
    if !err.requires_login() {
        state.report(&err, fallback);
    }
    err
}

/// Like [`reported`], ignoring the backend detail
pub(crate) fn reported_generic<H: HttpClient>(
    state: &AppState<H>,
    err: impl Into<AppError>,
    message: &str,
) -> AppError {
    let err = err.into();
    if !err.requires_login() {
        state.report_generic(&err, message);
    }
    err
}
