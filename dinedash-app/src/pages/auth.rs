//! Login and signup flows for customers, restaurant owners and admins

use dinedash_client::{HttpClient, SignupRequest, TokenResponse};
use shared::models::{RestaurantCreate, UserProfile, UserRole};

use super::Navigation;
use crate::core::{AppError, AppResult, AppState, DashboardTab, Route};

const DEFAULT_HOURS: &str = "9:00 AM - 10:00 PM";

/// Auth failures are always shown, a 401 here means bad credentials
fn failed<H: HttpClient>(state: &AppState<H>, err: impl Into<AppError>, fallback: &str) -> AppError {
    let err = err.into();
    state.report(&err, fallback);
    err
}

/// Where each role lands after logging in
fn landing(role: &UserRole) -> Route {
    match role {
        UserRole::Restaurant => Route::RestaurantDashboard(DashboardTab::Orders),
        UserRole::Admin => Route::Admin,
        _ => Route::Home,
    }
}

/// Log in with `role` credentials and store the session
pub async fn login<H: HttpClient>(
    state: &AppState<H>,
    role: &UserRole,
    email: &str,
    password: &str,
) -> AppResult<(UserProfile, Navigation)> {
    let fallback = match role {
        UserRole::Admin => "Invalid admin credentials",
        _ => "Authentication failed",
    };
    let resp = state
        .api
        .login(role, email, password)
        .await
        .map_err(|e| failed(state, e, fallback))?;
    let profile = state.login(resp).await.map_err(|e| failed(state, e, fallback))?;

    tracing::info!(user_id = %profile.user_id, role = %profile.role, "Logged in");
    match role {
        UserRole::Admin => state.notifier.success("Welcome, Admin!"),
        _ => state.notifier.success("Login successful!"),
    }
    Ok((profile.clone(), Navigation::To(landing(&profile.role))))
}

/// Create a customer account and log in
pub async fn customer_signup<H: HttpClient>(
    state: &AppState<H>,
    req: &SignupRequest,
) -> AppResult<(UserProfile, Navigation)> {
    let resp = state
        .api
        .signup(&UserRole::Customer, req)
        .await
        .map_err(|e| failed(state, e, "Authentication failed"))?;
    let profile = state
        .login(resp)
        .await
        .map_err(|e| failed(state, e, "Authentication failed"))?;

    tracing::info!(user_id = %profile.user_id, "Customer account created");
    state.notifier.success("Account created successfully!");
    Ok((profile, Navigation::To(Route::Home)))
}

/// Restaurant account created but without a restaurant profile yet
///
/// The session is only stored once the profile exists.
#[derive(Debug, Clone)]
pub struct PendingRestaurantAccount {
    account: TokenResponse,
}

impl PendingRestaurantAccount {
    pub fn user_id(&self) -> &str {
        &self.account.user_id
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    /// Profile form prefilled with defaults
    pub fn profile_template(&self) -> RestaurantCreate {
        RestaurantCreate {
            hours: DEFAULT_HOURS.to_string(),
            ..Default::default()
        }
    }
}

/// Step 1 of restaurant signup: create the owner account
pub async fn restaurant_signup<H: HttpClient>(
    state: &AppState<H>,
    req: &SignupRequest,
) -> AppResult<PendingRestaurantAccount> {
    let account = state
        .api
        .signup(&UserRole::Restaurant, req)
        .await
        .map_err(|e| failed(state, e, "Authentication failed"))?;

    tracing::info!(user_id = %account.user_id, "Restaurant account created");
    state
        .notifier
        .success("Account created! Now add your restaurant details.");
    Ok(PendingRestaurantAccount { account })
}

/// Step 2 of restaurant signup: create the restaurant with the new token, then log in
///
/// On failure the previous token is reinstated and no session is stored.
pub async fn complete_restaurant_profile<H: HttpClient>(
    state: &AppState<H>,
    pending: &PendingRestaurantAccount,
    profile: &RestaurantCreate,
) -> AppResult<Navigation> {
    let previous = state.api.token().await;
    state.api.set_token(Some(pending.account.token.clone())).await;

    let restaurant = match state.api.create_restaurant(profile).await {
        Ok(r) => r,
        Err(e) => {
            state.api.set_token(previous).await;
            return Err(failed(state, e, "Failed to create restaurant profile"));
        }
    };

    state
        .login(pending.account.clone())
        .await
        .map_err(|e| failed(state, e, "Failed to create restaurant profile"))?;

    tracing::info!(
        restaurant_id = %restaurant.restaurant_id,
        owner_id = %pending.account.user_id,
        "Restaurant profile created"
    );
    state
        .notifier
        .success("Restaurant profile created successfully!");
    Ok(Navigation::To(Route::RestaurantDashboard(DashboardTab::Orders)))
}

/// Clear the session
pub async fn logout<H: HttpClient>(state: &AppState<H>) -> AppResult<Navigation> {
    state
        .logout()
        .await
        .map_err(|e| failed(state, e, "Failed to log out"))?;
    state.notifier.info("Logged out");
    Ok(Navigation::To(Route::Home))
}
