//! Favorite restaurants (customers only)

use dinedash_client::HttpClient;
use shared::models::{Restaurant, UserRole};

use super::reported_generic;
use crate::core::{AppResult, AppState};

#[derive(Debug, Default)]
pub struct FavoritesPage {
    pub restaurants: Vec<Restaurant>,
}

impl FavoritesPage {
    pub async fn load<H: HttpClient>(&mut self, state: &AppState<H>) -> AppResult<&[Restaurant]> {
        state.require_role(UserRole::Customer).await?;
        self.restaurants = state
            .api
            .list_favorites()
            .await
            .map_err(|e| reported_generic(state, e, "Failed to load favorites"))?;
        Ok(&self.restaurants)
    }

    /// Remove from the backend, then from the local list
    pub async fn remove<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        restaurant_id: &str,
    ) -> AppResult<()> {
        state.require_role(UserRole::Customer).await?;
        state
            .api
            .remove_favorite(restaurant_id)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to remove favorite"))?;
        self.restaurants.retain(|r| r.restaurant_id != restaurant_id);
        state.notifier.success("Removed from favorites");
        Ok(())
    }

    pub fn contains(&self, restaurant_id: &str) -> bool {
        self.restaurants.iter().any(|r| r.restaurant_id == restaurant_id)
    }
}

/// Mark a restaurant as favorite
pub async fn add<H: HttpClient>(state: &AppState<H>, restaurant_id: &str) -> AppResult<()> {
    state.require_role(UserRole::Customer).await?;
    state
        .api
        .add_favorite(restaurant_id)
        .await
        .map_err(|e| reported_generic(state, e, "Failed to add favorite"))?;
    tracing::debug!(restaurant_id, "Favorite added");
    state.notifier.success("Added to favorites");
    Ok(())
}
