//! Admin aggregates
//!
//! Rows returned by the `/admin/*` endpoints are the plain entities plus a
//! few joined fields, so each row flattens its base entity.

use serde::{Deserialize, Serialize};

use super::{Order, Reservation, Restaurant, User};

/// `GET /admin/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_restaurants: u64,
    pub total_orders: u64,
    pub total_reservations: u64,
    pub pending_orders: u64,
    pub pending_reservations: u64,
    pub total_revenue: f64,
    pub order_revenue: f64,
    pub reservation_revenue: f64,
    /// Orders in the last 7 days
    pub recent_orders: u64,
    /// Reservations in the last 7 days
    pub recent_reservations: u64,
}

/// Owner or customer summary joined into admin rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonSummary {
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
}

/// Restaurant summary joined into admin order/reservation rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantSummary {
    pub restaurant_id: Option<String>,
    pub name: String,
}

/// `GET /admin/restaurants` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(default)]
    pub owner: Option<PersonSummary>,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub reservation_count: u64,
    #[serde(default)]
    pub revenue: f64,
}

/// `GET /admin/orders` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrder {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub restaurant: Option<RestaurantSummary>,
    #[serde(default)]
    pub customer: Option<PersonSummary>,
}

/// `GET /admin/reservations` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminReservation {
    #[serde(flatten)]
    pub reservation: Reservation,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub restaurant: Option<RestaurantSummary>,
    #[serde(default)]
    pub customer: Option<PersonSummary>,
}

/// `GET /admin/users` row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub reservation_count: u64,
}

impl AdminOrder {
    /// Restaurant name from either joined field
    pub fn restaurant_label(&self) -> Option<&str> {
        self.restaurant_name
            .as_deref()
            .or_else(|| self.restaurant.as_ref().map(|r| r.name.as_str()))
    }
}

impl AdminReservation {
    /// Restaurant name from either joined field
    pub fn restaurant_label(&self) -> Option<&str> {
        self.restaurant_name
            .as_deref()
            .or_else(|| self.restaurant.as_ref().map(|r| r.name.as_str()))
    }
}
