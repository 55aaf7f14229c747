//! Order endpoints

use shared::client::{MessageResponse, StatusUpdate};
use shared::models::{Order, OrderCreate, OrderStatus};

use crate::client::common::api_path;
use crate::{ClientResult, DineDashClient, HttpClient};

impl<H: HttpClient> DineDashClient<H> {
    /// `POST /orders`
    pub async fn create_order(&self, data: &OrderCreate) -> ClientResult<Order> {
        self.http.post(&api_path("/orders"), data).await
    }

    /// `GET /orders` - the caller's orders, newest first
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get(&api_path("/orders")).await
    }

    /// `GET /orders/{id}`
    pub async fn get_order(&self, order_id: &str) -> ClientResult<Order> {
        self.http.get(&api_path(&format!("/orders/{}", order_id))).await
    }

    /// `PUT /orders/{id}/status` (restaurant owner)
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: &OrderStatus,
    ) -> ClientResult<MessageResponse> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http
            .put(&api_path(&format!("/orders/{}/status", order_id)), &body)
            .await
    }

    /// `GET /restaurant/orders` - orders of the caller's restaurants
    pub async fn restaurant_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get(&api_path("/restaurant/orders")).await
    }
}
