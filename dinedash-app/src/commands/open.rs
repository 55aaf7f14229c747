//! `dinedash open <path>`: resolve an app path and show that page

use dinedash_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{RestaurantQuery, UserRole};

use super::{admin, browse, dashboard, orders, output};
use crate::cli::args::{AdminAction, DashboardAction};
use crate::core::router::resolve;
use crate::core::{AppError, AppResult, AppState, AutoConfirm, DashboardTab, Resolution, Route};
use crate::pages::home::HomePage;
use crate::pages::payment;
use crate::pages::restaurant_dashboard::MenuManager;

pub async fn run<H: HttpClient>(state: &AppState<H>, path: &str) -> AppResult<()> {
    let route = Route::parse(path);
    let resolution = {
        let session = state.session.read().await;
        resolve(route, &session)
    };

    let route = match resolution {
        Resolution::Render(route) => route,
        Resolution::Redirect(login) => {
            println!("→ {}", login);
            return Err(AppError::LoginRequired(login_role(&login)));
        }
    };
    tracing::debug!(route = %route, "Opening page");

    match route {
        Route::Home => {
            let mut page = HomePage::new(RestaurantQuery::default());
            output::restaurants(page.load(state).await?);
        }
        Route::Restaurant(id) => browse::restaurant(state, &id, None).await?,
        Route::CustomerAuth => login_prompt(&UserRole::Customer),
        Route::RestaurantAuth => login_prompt(&UserRole::Restaurant),
        Route::AdminAuth => login_prompt(&UserRole::Admin),
        Route::Cart => orders::cart(state).await?,
        Route::Order(id) => orders::order(state, &id).await?,
        Route::Reservation(id) => orders::reservation(state, &id).await?,
        Route::CustomerProfile => orders::profile(state).await?,
        Route::Favorites => browse::favorites(state).await?,
        Route::RestaurantHome => dashboard::run(state, DashboardAction::Summary).await?,
        Route::RestaurantDashboard(DashboardTab::Orders) => {
            dashboard::run(state, DashboardAction::Orders).await?
        }
        Route::RestaurantDashboard(DashboardTab::Reservations) => {
            dashboard::run(state, DashboardAction::Reservations).await?
        }
        Route::RestaurantDashboard(DashboardTab::Menu) => match MenuManager::open(state).await? {
            Some(menu) => {
                println!("{} ({} items)", menu.restaurant.name, menu.item_count());
                output::menu(&menu.menu, |_| 0);
            }
            None => println!("No Restaurant Found"),
        },
        Route::Admin => admin::run(state, AdminAction::Stats, &AutoConfirm(false)).await?,
        Route::PaymentSuccess { session_id } => orders::payment_status(state, session_id).await?,
        Route::PaymentCancel => {
            println!("{}", payment::CANCEL_TITLE);
            println!("  {}", payment::CANCEL_MESSAGE);
        }
        Route::NotFound(path) => {
            println!("Page not found: {}", path);
            return Err(AppError::validation(ErrorCode::InvalidRequest));
        }
    }
    Ok(())
}

fn login_role(login: &Route) -> UserRole {
    match login {
        Route::RestaurantAuth => UserRole::Restaurant,
        Route::AdminAuth => UserRole::Admin,
        _ => UserRole::Customer,
    }
}

fn login_prompt(role: &UserRole) {
    println!("Run `dinedash login --role {}` to sign in", role);
}
