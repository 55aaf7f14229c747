//! Admin dashboard
//!
//! Loads the whole platform dataset at once and filters it client-side.
//! Every successful mutation is followed by a full reload so the view
//! reflects the backend.

use dinedash_client::HttpClient;
use shared::models::{
    AdminOrder, AdminReservation, AdminRestaurant, AdminUser, DashboardStats, OrderStatus,
    ReservationStatus, RestaurantStatus, UserRole, UserStatus,
};

use super::{reported, reported_generic};
use crate::core::{AppResult, AppState, Confirm};

/// Rows shown in each overview list
const OVERVIEW_ROWS: usize = 5;

const DELETE_RESTAURANT_PROMPT: &str =
    "Are you sure you want to delete this restaurant? This action cannot be undone.";
const DELETE_USER_PROMPT: &str =
    "Are you sure you want to delete this user? This action cannot be undone.";

/// Search text and status filter shared by all tabs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFilter {
    pub search: String,
    /// Wire status value, `None` for all
    pub status: Option<String>,
}

impl AdminFilter {
    pub fn new(search: impl Into<String>, status: Option<String>) -> Self {
        Self {
            search: search.into(),
            status: status.filter(|s| !s.is_empty() && s != "all"),
        }
    }

    fn needle(&self) -> String {
        self.search.to_lowercase()
    }

    fn status_matches(&self, status: &str) -> bool {
        self.status.as_deref().is_none_or(|wanted| wanted == status)
    }

    /// Name contains the search text (any case)
    pub fn restaurant(&self, row: &AdminRestaurant) -> bool {
        row.restaurant.name.to_lowercase().contains(&self.needle())
            && self.status_matches(row.restaurant.status.as_str())
    }

    /// Order id contains the search text, or the restaurant name does (any case)
    pub fn order(&self, row: &AdminOrder) -> bool {
        let text = row.order.order_id.contains(&self.search)
            || row
                .restaurant_label()
                .is_some_and(|name| name.to_lowercase().contains(&self.needle()));
        text && self.status_matches(row.order.status.as_str())
    }

    pub fn reservation(&self, row: &AdminReservation) -> bool {
        let text = row.reservation.reservation_id.contains(&self.search)
            || row
                .restaurant_label()
                .is_some_and(|name| name.to_lowercase().contains(&self.needle()));
        text && self.status_matches(row.reservation.status.as_str())
    }

    /// Name or email contains the search text; the status filter does not apply
    pub fn user(&self, row: &AdminUser) -> bool {
        let needle = self.needle();
        row.user.name.to_lowercase().contains(&needle)
            || row.user.email.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Default)]
pub struct AdminDashboard {
    pub stats: DashboardStats,
    pub restaurants: Vec<AdminRestaurant>,
    pub orders: Vec<AdminOrder>,
    pub reservations: Vec<AdminReservation>,
    pub users: Vec<AdminUser>,
    pub filter: AdminFilter,
}

impl AdminDashboard {
    /// Fetch stats, restaurants, orders, reservations and users together
    pub async fn load<H: HttpClient>(&mut self, state: &AppState<H>) -> AppResult<()> {
        state.require_role(UserRole::Admin).await?;

        let api = &state.api;
        let (stats, restaurants, orders, reservations, users) = tokio::try_join!(
            api.admin_stats(),
            api.admin_restaurants(),
            api.admin_orders(),
            api.admin_reservations(),
            api.admin_users()
        )
        .map_err(|e| reported_generic(state, e, "Failed to load dashboard data"))?;

        tracing::debug!(
            restaurants = restaurants.len(),
            orders = orders.len(),
            reservations = reservations.len(),
            users = users.len(),
            "Admin dashboard loaded"
        );
        self.stats = stats;
        self.restaurants = restaurants;
        self.orders = orders;
        self.reservations = reservations;
        self.users = users;
        Ok(())
    }

    async fn refetch<H: HttpClient>(&mut self, state: &AppState<H>) {
        if let Err(e) = self.load(state).await {
            tracing::debug!(error = %e, "Reload after admin action failed");
        }
    }

    // ========== Overview ==========

    pub fn recent_orders(&self) -> &[AdminOrder] {
        &self.orders[..self.orders.len().min(OVERVIEW_ROWS)]
    }

    pub fn recent_reservations(&self) -> &[AdminReservation] {
        &self.reservations[..self.reservations.len().min(OVERVIEW_ROWS)]
    }

    // ========== Filtered tabs ==========

    pub fn filtered_restaurants(&self) -> Vec<&AdminRestaurant> {
        self.restaurants.iter().filter(|r| self.filter.restaurant(r)).collect()
    }

    pub fn filtered_orders(&self) -> Vec<&AdminOrder> {
        self.orders.iter().filter(|o| self.filter.order(o)).collect()
    }

    pub fn filtered_reservations(&self) -> Vec<&AdminReservation> {
        self.reservations
            .iter()
            .filter(|r| self.filter.reservation(r))
            .collect()
    }

    pub fn filtered_users(&self) -> Vec<&AdminUser> {
        self.users.iter().filter(|u| self.filter.user(u)).collect()
    }

    // ========== Actions ==========

    /// Suspend or approve a restaurant
    pub async fn set_restaurant_status<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        restaurant_id: &str,
        status: &RestaurantStatus,
    ) -> AppResult<()> {
        state
            .api
            .admin_set_restaurant_status(restaurant_id, status)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to update restaurant status"))?;
        tracing::info!(restaurant_id, status = %status, "Restaurant status changed");
        state.notifier.success(format!("Restaurant {}", status));
        self.refetch(state).await;
        Ok(())
    }

    /// Delete a restaurant after confirmation
    ///
    /// Returns `false` when the admin declined.
    pub async fn delete_restaurant<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        restaurant_id: &str,
        confirm: &dyn Confirm,
    ) -> AppResult<bool> {
        if !confirm.confirm(DELETE_RESTAURANT_PROMPT) {
            return Ok(false);
        }
        state
            .api
            .admin_delete_restaurant(restaurant_id)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to delete restaurant"))?;
        tracing::info!(restaurant_id, "Restaurant deleted");
        state.notifier.success("Restaurant deleted");
        self.refetch(state).await;
        Ok(true)
    }

    pub async fn set_order_status<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        order_id: &str,
        status: &OrderStatus,
    ) -> AppResult<()> {
        state
            .api
            .admin_set_order_status(order_id, status)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to update order status"))?;
        tracing::info!(order_id, status = %status, "Order status changed by admin");
        state.notifier.success("Order status updated");
        self.refetch(state).await;
        Ok(())
    }

    pub async fn set_reservation_status<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        reservation_id: &str,
        status: &ReservationStatus,
    ) -> AppResult<()> {
        state
            .api
            .admin_set_reservation_status(reservation_id, status)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to update reservation status"))?;
        tracing::info!(reservation_id, status = %status, "Reservation status changed by admin");
        state.notifier.success("Reservation status updated");
        self.refetch(state).await;
        Ok(())
    }

    /// Suspend or reactivate a user
    pub async fn set_user_status<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        user_id: &str,
        status: &UserStatus,
    ) -> AppResult<()> {
        state
            .api
            .admin_set_user_status(user_id, status)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to update user status"))?;
        tracing::info!(user_id, status = %status, "User status changed");
        state.notifier.success(format!("User {}", status));
        self.refetch(state).await;
        Ok(())
    }

    /// Delete a user after confirmation, the backend reason is shown on failure
    pub async fn delete_user<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        user_id: &str,
        confirm: &dyn Confirm,
    ) -> AppResult<bool> {
        if !confirm.confirm(DELETE_USER_PROMPT) {
            return Ok(false);
        }
        state
            .api
            .admin_delete_user(user_id)
            .await
            .map_err(|e| reported(state, e, "Failed to delete user"))?;
        tracing::info!(user_id, "User deleted");
        state.notifier.success("User deleted");
        self.refetch(state).await;
        Ok(true)
    }
}
