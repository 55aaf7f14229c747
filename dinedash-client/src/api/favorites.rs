//! Favorite restaurant endpoints

use shared::client::MessageResponse;
use shared::models::Restaurant;

use crate::client::common::api_path;
use crate::{ClientResult, DineDashClient, HttpClient};

impl<H: HttpClient> DineDashClient<H> {
    /// `GET /favorites`
    pub async fn list_favorites(&self) -> ClientResult<Vec<Restaurant>> {
        self.http.get(&api_path("/favorites")).await
    }

    /// `POST /favorites/{restaurant_id}`
    pub async fn add_favorite(&self, restaurant_id: &str) -> ClientResult<MessageResponse> {
        self.http
            .post_empty(&api_path(&format!("/favorites/{}", restaurant_id)))
            .await
    }

    /// `DELETE /favorites/{restaurant_id}`
    pub async fn remove_favorite(&self, restaurant_id: &str) -> ClientResult<MessageResponse> {
        self.http
            .delete(&api_path(&format!("/favorites/{}", restaurant_id)))
            .await
    }
}
