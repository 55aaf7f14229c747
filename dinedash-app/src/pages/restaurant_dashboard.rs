//! Restaurant owner area: order and reservation management, menu
//! management and the restaurant home summary

use dinedash_client::HttpClient;
use shared::models::{
    MenuCategory, MenuCategoryCreate, MenuItem, MenuItemCreate, MenuSection, Order, OrderStatus,
    Reservation, ReservationStatus, Restaurant, RestaurantCreate, RestaurantQuery, UserRole,
    menu_item_count,
};
use shared::money;

use super::{reported, reported_generic};
use crate::core::{AppResult, AppState, DashboardTab};

/// Orders still being worked on by the kitchen
const PENDING_ORDER_STATUSES: [OrderStatus; 3] = [
    OrderStatus::Placed,
    OrderStatus::Accepted,
    OrderStatus::Preparing,
];

/// Restaurant owned by the logged-in user, if any
pub async fn own_restaurant<H: HttpClient>(state: &AppState<H>) -> AppResult<Option<Restaurant>> {
    let user = state.require_role(UserRole::Restaurant).await?;
    let restaurants = state
        .api
        .list_restaurants(&RestaurantQuery::default())
        .await
        .map_err(|e| reported(state, e, "Failed to load restaurant"))?;
    Ok(restaurants.into_iter().find(|r| r.owner_id == user.user_id))
}

// =============================================================================
// Orders and reservations
// =============================================================================

#[derive(Debug, Default)]
pub struct RestaurantDashboard {
    pub tab: DashboardTab,
    pub orders: Vec<Order>,
    pub reservations: Vec<Reservation>,
}

impl RestaurantDashboard {
    pub fn new(tab: DashboardTab) -> Self {
        Self {
            tab,
            ..Default::default()
        }
    }

    /// Fetch orders and reservations of the owner's restaurants
    pub async fn load<H: HttpClient>(&mut self, state: &AppState<H>) -> AppResult<()> {
        state.require_role(UserRole::Restaurant).await?;
        let (orders, reservations) = tokio::try_join!(
            state.api.restaurant_orders(),
            state.api.restaurant_reservations()
        )
        .map_err(|e| reported_generic(state, e, "Failed to load data"))?;

        tracing::debug!(
            orders = orders.len(),
            reservations = reservations.len(),
            "Restaurant dashboard loaded"
        );
        self.orders = orders;
        self.reservations = reservations;
        Ok(())
    }

    pub async fn update_order_status<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        order_id: &str,
        status: &OrderStatus,
    ) -> AppResult<()> {
        state
            .api
            .update_order_status(order_id, status)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to update order status"))?;
        tracing::info!(order_id, status = %status, "Order status updated");
        state.notifier.success("Order status updated");
        self.refetch(state).await;
        Ok(())
    }

    pub async fn update_reservation_status<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        reservation_id: &str,
        status: &ReservationStatus,
    ) -> AppResult<()> {
        state
            .api
            .update_reservation_status(reservation_id, status)
            .await
            .map_err(|e| reported_generic(state, e, "Failed to update reservation status"))?;
        tracing::info!(reservation_id, status = %status, "Reservation status updated");
        state.notifier.success("Reservation status updated");
        self.refetch(state).await;
        Ok(())
    }

    /// Reload after a successful update, a failed reload keeps the old rows
    async fn refetch<H: HttpClient>(&mut self, state: &AppState<H>) {
        if let Err(e) = self.load(state).await {
            tracing::debug!(error = %e, "Reload after status update failed");
        }
    }
}

// =============================================================================
// Menu management
// =============================================================================

#[derive(Debug)]
pub struct MenuManager {
    pub restaurant: Restaurant,
    pub categories: Vec<MenuCategory>,
    pub menu: Vec<MenuSection>,
}

impl MenuManager {
    /// Open the menu editor of the owner's restaurant
    ///
    /// `None` when the owner has no restaurant yet.
    pub async fn open<H: HttpClient>(state: &AppState<H>) -> AppResult<Option<Self>> {
        let Some(restaurant) = own_restaurant(state).await? else {
            return Ok(None);
        };
        let mut manager = Self {
            restaurant,
            categories: Vec::new(),
            menu: Vec::new(),
        };
        manager.reload(state).await?;
        Ok(Some(manager))
    }

    pub async fn reload<H: HttpClient>(&mut self, state: &AppState<H>) -> AppResult<()> {
        let id = &self.restaurant.restaurant_id;
        let (categories, menu) =
            tokio::try_join!(state.api.list_categories(id), state.api.get_menu(id, None))
                .map_err(|e| reported(state, e, "Failed to load menu"))?;
        self.categories = categories;
        self.menu = menu;
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        menu_item_count(&self.menu)
    }

    pub async fn add_category<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        category: &MenuCategoryCreate,
    ) -> AppResult<MenuCategory> {
        let created = state
            .api
            .create_category(&self.restaurant.restaurant_id, category)
            .await
            .map_err(|e| reported(state, e, "Failed to add category"))?;
        tracing::info!(category_id = %created.category_id, name = %created.name, "Menu category created");
        state.notifier.success("Category added");
        self.reload(state).await?;
        Ok(created)
    }

    pub async fn add_item<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        item: &MenuItemCreate,
    ) -> AppResult<MenuItem> {
        let created = state
            .api
            .create_menu_item(&self.restaurant.restaurant_id, item)
            .await
            .map_err(|e| reported(state, e, "Failed to add menu item"))?;
        tracing::info!(item_id = %created.item_id, name = %created.name, price = created.price, "Menu item created");
        state.notifier.success("Menu item added");
        self.reload(state).await?;
        Ok(created)
    }

    /// Replace the restaurant profile
    pub async fn update_profile<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        profile: &RestaurantCreate,
    ) -> AppResult<()> {
        state
            .api
            .update_restaurant(&self.restaurant.restaurant_id, profile)
            .await
            .map_err(|e| reported(state, e, "Failed to update restaurant"))?;
        self.restaurant = state
            .api
            .get_restaurant(&self.restaurant.restaurant_id)
            .await
            .map_err(|e| reported(state, e, "Failed to update restaurant"))?;
        state.notifier.success("Restaurant updated");
        Ok(())
    }
}

// =============================================================================
// Restaurant home
// =============================================================================

/// Quick stats on the restaurant home page
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub restaurant: Restaurant,
    pub menu: Vec<MenuSection>,
    pub menu_items: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    pub revenue: f64,
}

impl HomeSummary {
    /// Stats over the orders that belong to `restaurant`
    pub fn compute(restaurant: Restaurant, menu: Vec<MenuSection>, orders: &[Order]) -> Self {
        let own: Vec<&Order> = orders
            .iter()
            .filter(|o| o.restaurant_id == restaurant.restaurant_id)
            .collect();
        Self {
            menu_items: menu_item_count(&menu),
            total_orders: own.len(),
            pending_orders: own
                .iter()
                .filter(|o| PENDING_ORDER_STATUSES.contains(&o.status))
                .count(),
            revenue: money::sum_lines(own.iter().map(|o| (o.total_amount, 1))),
            restaurant,
            menu,
        }
    }
}

/// Load the restaurant home page, `None` when no restaurant exists yet
pub async fn summary<H: HttpClient>(state: &AppState<H>) -> AppResult<Option<HomeSummary>> {
    let Some(restaurant) = own_restaurant(state).await? else {
        return Ok(None);
    };
    let (menu, orders) = tokio::try_join!(
        state.api.get_menu(&restaurant.restaurant_id, None),
        state.api.restaurant_orders()
    )
    .map_err(|e| reported(state, e, "Failed to load restaurant"))?;
    Ok(Some(HomeSummary::compute(restaurant, menu, &orders)))
}
