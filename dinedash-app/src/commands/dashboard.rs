//! Restaurant owner commands

use dinedash_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{
    MenuCategoryCreate, MenuItemCreate, OrderStatus, ReservationStatus, UserRole,
};

use super::{invalid, output};
use crate::cli::args::DashboardAction;
use crate::core::status::{order_status_options, reservation_status_options};
use crate::core::{AppError, AppResult, AppState, DashboardTab};
use crate::pages::restaurant_dashboard::{self, MenuManager, RestaurantDashboard};

pub async fn run<H: HttpClient>(state: &AppState<H>, action: DashboardAction) -> AppResult<()> {
    match action {
        DashboardAction::Orders => {
            let mut dash = RestaurantDashboard::new(DashboardTab::Orders);
            dash.load(state).await?;
            output::orders(&dash.orders);
        }
        DashboardAction::Reservations => {
            let mut dash = RestaurantDashboard::new(DashboardTab::Reservations);
            dash.load(state).await?;
            output::reservations(&dash.reservations);
        }
        DashboardAction::OrderStatus { order_id, status } => {
            let status = parse_order_status(state, &UserRole::Restaurant, &status)?;
            let mut dash = RestaurantDashboard::new(DashboardTab::Orders);
            dash.update_order_status(state, &order_id, &status).await?;
            output::orders(&dash.orders);
        }
        DashboardAction::ReservationStatus {
            reservation_id,
            status,
        } => {
            let status = parse_reservation_status(state, &UserRole::Restaurant, &status)?;
            let mut dash = RestaurantDashboard::new(DashboardTab::Reservations);
            dash.update_reservation_status(state, &reservation_id, &status)
                .await?;
            output::reservations(&dash.reservations);
        }
        DashboardAction::AddCategory {
            name,
            display_order,
        } => {
            let mut menu = open_menu(state).await?;
            let category = menu
                .add_category(state, &MenuCategoryCreate { name, display_order })
                .await?;
            println!("{}  {}", category.category_id, category.name);
        }
        DashboardAction::AddItem {
            category_id,
            name,
            price,
            description,
            image_url,
            non_veg,
            unavailable,
        } => {
            let mut menu = open_menu(state).await?;
            let item = menu
                .add_item(
                    state,
                    &MenuItemCreate {
                        category_id,
                        name,
                        description,
                        price,
                        image_url,
                        is_veg: !non_veg,
                        is_available: !unavailable,
                    },
                )
                .await?;
            println!("{}  {}  ({} items on the menu)", item.item_id, item.name, menu.item_count());
        }
        DashboardAction::Summary => match restaurant_dashboard::summary(state).await? {
            Some(summary) => output::home_summary(&summary),
            None => println!("No Restaurant Found"),
        },
    }
    Ok(())
}

async fn open_menu<H: HttpClient>(state: &AppState<H>) -> AppResult<MenuManager> {
    match MenuManager::open(state).await? {
        Some(menu) => Ok(menu),
        None => {
            state.notifier.error("No Restaurant Found");
            Err(AppError::validation(ErrorCode::RestaurantNotFound))
        }
    }
}

/// Status value offered to `role`, anything else is rejected before sending
pub(crate) fn parse_order_status<H: HttpClient>(
    state: &AppState<H>,
    role: &UserRole,
    value: &str,
) -> AppResult<OrderStatus> {
    let status = OrderStatus::from(value);
    if order_status_options(role).iter().any(|o| o.status == status) {
        Ok(status)
    } else {
        Err(invalid(state, format!("Unknown order status: {}", value)))
    }
}

pub(crate) fn parse_reservation_status<H: HttpClient>(
    state: &AppState<H>,
    role: &UserRole,
    value: &str,
) -> AppResult<ReservationStatus> {
    let status = ReservationStatus::from(value);
    if reservation_status_options(role).iter().any(|o| o.status == status) {
        Ok(status)
    } else {
        Err(invalid(state, format!("Unknown reservation status: {}", value)))
    }
}
