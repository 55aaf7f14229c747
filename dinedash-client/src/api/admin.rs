//! Admin endpoints (admin token required)

use shared::client::{MessageResponse, StatusUpdate};
use shared::models::{
    AdminOrder, AdminReservation, AdminRestaurant, AdminUser, DashboardStats, OrderStatus,
    ReservationStatus, RestaurantStatus, UserStatus,
};

use crate::client::common::api_path;
use crate::{ClientResult, DineDashClient, HttpClient};

impl<H: HttpClient> DineDashClient<H> {
    /// `GET /admin/dashboard/stats`
    pub async fn admin_stats(&self) -> ClientResult<DashboardStats> {
        self.http.get(&api_path("/admin/dashboard/stats")).await
    }

    /// `GET /admin/restaurants`
    pub async fn admin_restaurants(&self) -> ClientResult<Vec<AdminRestaurant>> {
        self.http.get(&api_path("/admin/restaurants")).await
    }

    /// `PUT /admin/restaurants/{id}/status`
    pub async fn admin_set_restaurant_status(
        &self,
        restaurant_id: &str,
        status: &RestaurantStatus,
    ) -> ClientResult<MessageResponse> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http
            .put(
                &api_path(&format!("/admin/restaurants/{}/status", restaurant_id)),
                &body,
            )
            .await
    }

    /// `DELETE /admin/restaurants/{id}`
    pub async fn admin_delete_restaurant(&self, restaurant_id: &str) -> ClientResult<MessageResponse> {
        self.http
            .delete(&api_path(&format!("/admin/restaurants/{}", restaurant_id)))
            .await
    }

    /// `GET /admin/orders`
    pub async fn admin_orders(&self) -> ClientResult<Vec<AdminOrder>> {
        self.http.get(&api_path("/admin/orders")).await
    }

    /// `PUT /admin/orders/{id}/status`
    pub async fn admin_set_order_status(
        &self,
        order_id: &str,
        status: &OrderStatus,
    ) -> ClientResult<MessageResponse> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http
            .put(&api_path(&format!("/admin/orders/{}/status", order_id)), &body)
            .await
    }

    /// `GET /admin/reservations`
    pub async fn admin_reservations(&self) -> ClientResult<Vec<AdminReservation>> {
        self.http.get(&api_path("/admin/reservations")).await
    }

    /// `PUT /admin/reservations/{id}/status`
    pub async fn admin_set_reservation_status(
        &self,
        reservation_id: &str,
        status: &ReservationStatus,
    ) -> ClientResult<MessageResponse> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http
            .put(
                &api_path(&format!("/admin/reservations/{}/status", reservation_id)),
                &body,
            )
            .await
    }

    /// `GET /admin/users`
    pub async fn admin_users(&self) -> ClientResult<Vec<AdminUser>> {
        self.http.get(&api_path("/admin/users")).await
    }

    /// `PUT /admin/users/{id}/status`
    pub async fn admin_set_user_status(
        &self,
        user_id: &str,
        status: &UserStatus,
    ) -> ClientResult<MessageResponse> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http
            .put(&api_path(&format!("/admin/users/{}/status", user_id)), &body)
            .await
    }

    /// `DELETE /admin/users/{id}`
    pub async fn admin_delete_user(&self, user_id: &str) -> ClientResult<MessageResponse> {
        self.http
            .delete(&api_path(&format!("/admin/users/{}", user_id)))
            .await
    }
}
