//! Restaurant and menu endpoints

use shared::client::MessageResponse;
use shared::models::{
    DietFilter, MenuCategory, MenuCategoryCreate, MenuItem, MenuItemCreate, MenuSection,
    Restaurant, RestaurantCreate, RestaurantQuery,
};

use crate::client::common::api_path;
use crate::{ClientResult, DineDashClient, HttpClient, path_with_query};

impl<H: HttpClient> DineDashClient<H> {
    /// `GET /restaurants?search&diet&service_type&cuisine`
    pub async fn list_restaurants(&self, query: &RestaurantQuery) -> ClientResult<Vec<Restaurant>> {
        let path = path_with_query(&api_path("/restaurants"), &query.to_params())?;
        self.http.get(&path).await
    }

    /// `GET /restaurants/{id}`
    pub async fn get_restaurant(&self, restaurant_id: &str) -> ClientResult<Restaurant> {
        self.http
            .get(&api_path(&format!("/restaurants/{}", restaurant_id)))
            .await
    }

    /// `POST /restaurants` (restaurant owner)
    pub async fn create_restaurant(&self, data: &RestaurantCreate) -> ClientResult<Restaurant> {
        self.http.post(&api_path("/restaurants"), data).await
    }

    /// `PUT /restaurants/{id}` (restaurant owner)
    pub async fn update_restaurant(
        &self,
        restaurant_id: &str,
        data: &RestaurantCreate,
    ) -> ClientResult<MessageResponse> {
        self.http
            .put(&api_path(&format!("/restaurants/{}", restaurant_id)), data)
            .await
    }

    /// `GET /restaurants/{id}/menu?diet`
    pub async fn get_menu(
        &self,
        restaurant_id: &str,
        diet: Option<DietFilter>,
    ) -> ClientResult<Vec<MenuSection>> {
        let params: Vec<(&str, String)> = diet
            .map(|d| vec![("diet", d.as_str().to_string())])
            .unwrap_or_default();
        let path = path_with_query(
            &api_path(&format!("/restaurants/{}/menu", restaurant_id)),
            &params,
        )?;
        self.http.get(&path).await
    }

    /// `GET /restaurants/{id}/categories`
    pub async fn list_categories(&self, restaurant_id: &str) -> ClientResult<Vec<MenuCategory>> {
        self.http
            .get(&api_path(&format!("/restaurants/{}/categories", restaurant_id)))
            .await
    }

    /// `POST /restaurants/{id}/categories` (restaurant owner)
    pub async fn create_category(
        &self,
        restaurant_id: &str,
        data: &MenuCategoryCreate,
    ) -> ClientResult<MenuCategory> {
        self.http
            .post(
                &api_path(&format!("/restaurants/{}/categories", restaurant_id)),
                data,
            )
            .await
    }

    /// `POST /restaurants/{id}/items` (restaurant owner)
    pub async fn create_menu_item(
        &self,
        restaurant_id: &str,
        data: &MenuItemCreate,
    ) -> ClientResult<MenuItem> {
        self.http
            .post(&api_path(&format!("/restaurants/{}/items", restaurant_id)), data)
            .await
    }
}
