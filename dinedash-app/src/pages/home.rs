//! Home / browse page

use dinedash_client::HttpClient;
use shared::models::{Restaurant, RestaurantQuery, ServiceType};

use super::reported;
use crate::core::{AppResult, AppState};

/// Badge text for a restaurant's service type; unknown types read as BOTH
pub fn service_badge(service_type: &ServiceType) -> &'static str {
    match service_type {
        ServiceType::Delivery => "DELIVERS",
        ServiceType::Reservations => "RESERVATIONS",
        _ => "BOTH",
    }
}

/// Diet markers shown on a restaurant card
pub fn diet_badges(restaurant: &Restaurant) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if restaurant.is_veg {
        badges.push("VEG");
    }
    if restaurant.is_non_veg {
        badges.push("NON-VEG");
    }
    badges
}

#[derive(Debug, Default)]
pub struct HomePage {
    pub query: RestaurantQuery,
    pub restaurants: Vec<Restaurant>,
}

impl HomePage {
    pub fn new(query: RestaurantQuery) -> Self {
        Self {
            query,
            restaurants: Vec::new(),
        }
    }

    /// Fetch restaurants for the current filters
    ///
    /// On failure the previous list is kept.
    pub async fn load<H: HttpClient>(&mut self, state: &AppState<H>) -> AppResult<&[Restaurant]> {
        let restaurants = state
            .api
            .list_restaurants(&self.query)
            .await
            .map_err(|e| reported(state, e, "Failed to load restaurants"))?;
        tracing::debug!(count = restaurants.len(), query = ?self.query, "Restaurants loaded");
        self.restaurants = restaurants;
        Ok(&self.restaurants)
    }

    /// Cart badge count in the header
    pub async fn cart_count<H: HttpClient>(state: &AppState<H>) -> u32 {
        state.cart.read().await.total_items()
    }
}
