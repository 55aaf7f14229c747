//! Admin console commands

use dinedash_client::HttpClient;
use shared::models::{RestaurantStatus, UserRole, UserStatus};

use super::dashboard::{parse_order_status, parse_reservation_status};
use super::{invalid, output};
use crate::cli::args::{AdminAction, FilterArgs};
use crate::core::{AppResult, AppState, Confirm};
use crate::pages::admin::{AdminDashboard, AdminFilter};

pub async fn run<H: HttpClient>(
    state: &AppState<H>,
    action: AdminAction,
    confirm: &dyn Confirm,
) -> AppResult<()> {
    let mut dash = AdminDashboard::default();
    dash.load(state).await?;

    match action {
        AdminAction::Stats => {
            output::stats(&dash.stats);
            println!("\nRecent orders");
            output::admin_orders(&dash.recent_orders().iter().collect::<Vec<_>>());
            println!("\nRecent reservations");
            output::admin_reservations(&dash.recent_reservations().iter().collect::<Vec<_>>());
        }
        AdminAction::Restaurants(args) => {
            dash.filter = filter(args);
            output::admin_restaurants(&dash.filtered_restaurants());
        }
        AdminAction::Orders(args) => {
            dash.filter = filter(args);
            output::admin_orders(&dash.filtered_orders());
        }
        AdminAction::Reservations(args) => {
            dash.filter = filter(args);
            output::admin_reservations(&dash.filtered_reservations());
        }
        AdminAction::Users(args) => {
            dash.filter = filter(args);
            output::admin_users(&dash.filtered_users());
        }
        AdminAction::RestaurantStatus {
            restaurant_id,
            status,
        } => {
            let status = RestaurantStatus::from(status);
            if !status.is_known() {
                return Err(invalid(state, format!("Unknown restaurant status: {}", status)));
            }
            dash.set_restaurant_status(state, &restaurant_id, &status).await?;
            output::admin_restaurants(&dash.filtered_restaurants());
        }
        AdminAction::DeleteRestaurant { restaurant_id } => {
            if dash.delete_restaurant(state, &restaurant_id, confirm).await? {
                output::admin_restaurants(&dash.filtered_restaurants());
            } else {
                println!("Cancelled");
            }
        }
        AdminAction::OrderStatus { order_id, status } => {
            let status = parse_order_status(state, &UserRole::Admin, &status)?;
            dash.set_order_status(state, &order_id, &status).await?;
            output::admin_orders(&dash.filtered_orders());
        }
        AdminAction::ReservationStatus {
            reservation_id,
            status,
        } => {
            let status = parse_reservation_status(state, &UserRole::Admin, &status)?;
            dash.set_reservation_status(state, &reservation_id, &status)
                .await?;
            output::admin_reservations(&dash.filtered_reservations());
        }
        AdminAction::UserStatus { user_id, status } => {
            let status = UserStatus::from(status);
            if !status.is_known() {
                return Err(invalid(state, format!("Unknown user status: {}", status)));
            }
            dash.set_user_status(state, &user_id, &status).await?;
            output::admin_users(&dash.filtered_users());
        }
        AdminAction::DeleteUser { user_id } => {
            if dash.delete_user(state, &user_id, confirm).await? {
                output::admin_users(&dash.filtered_users());
            } else {
                println!("Cancelled");
            }
        }
    }
    Ok(())
}

fn filter(args: FilterArgs) -> AdminFilter {
    AdminFilter::new(args.search, args.status)
}
