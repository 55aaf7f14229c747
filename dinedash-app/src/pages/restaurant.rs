//! Restaurant page: menu, add to cart, table availability and booking
//!
//! Booking is only possible after an availability check for the current
//! form answered `available = true`. Editing the form afterwards does not
//! invalidate that answer; the backend rechecks seats on creation.

use dinedash_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{
    Availability, CheckoutRequest, DietFilter, MenuItem, MenuSection, PaymentType,
    ReservationCreate, Restaurant, ServiceType, UserRole,
};

use super::{Navigation, reported};
use crate::core::{AddOutcome, AppError, AppResult, AppState, Confirm, Route};

const DEFAULT_PARTY_SIZE: u32 = 2;

/// Reservation form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub party_size: u32,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            party_size: DEFAULT_PARTY_SIZE,
        }
    }
}

#[derive(Debug)]
pub struct RestaurantPage {
    pub restaurant_id: String,
    pub restaurant: Option<Restaurant>,
    pub menu: Vec<MenuSection>,
    pub diet: Option<DietFilter>,
    pub form: ReservationForm,
    availability: Option<Availability>,
}

impl RestaurantPage {
    pub fn new(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            restaurant: None,
            menu: Vec::new(),
            diet: None,
            form: ReservationForm::default(),
            availability: None,
        }
    }

    /// Load the restaurant, then its menu when it delivers
    ///
    /// A restaurant that cannot be loaded sends the user home.
    pub async fn load<H: HttpClient>(&mut self, state: &AppState<H>) -> Navigation {
        match state.api.get_restaurant(&self.restaurant_id).await {
            Ok(restaurant) => self.restaurant = Some(restaurant),
            Err(e) => {
                tracing::warn!(restaurant_id = %self.restaurant_id, error = %e, "Failed to load restaurant");
                state.notifier.error("Restaurant not found");
                return Navigation::To(Route::Home);
            }
        }

        if self.shows_delivery() {
            // menu failures are notified and leave the page usable
            let _ = self.load_menu(state).await;
        }
        Navigation::Stay
    }

    fn service_type(&self) -> Option<&ServiceType> {
        self.restaurant.as_ref().map(|r| &r.service_type)
    }

    pub fn shows_delivery(&self) -> bool {
        matches!(
            self.service_type(),
            Some(ServiceType::Delivery | ServiceType::Both)
        )
    }

    pub fn shows_reservations(&self) -> bool {
        matches!(
            self.service_type(),
            Some(ServiceType::Reservations | ServiceType::Both)
        )
    }

    pub async fn load_menu<H: HttpClient>(&mut self, state: &AppState<H>) -> AppResult<()> {
        let menu = state
            .api
            .get_menu(&self.restaurant_id, self.diet)
            .await
            .map_err(|e| reported(state, e, "Failed to load menu"))?;
        self.menu = menu;
        Ok(())
    }

    /// Change the diet filter and reload the menu
    pub async fn set_diet<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
        diet: Option<DietFilter>,
    ) -> AppResult<()> {
        self.diet = diet;
        if self.shows_delivery() {
            self.load_menu(state).await?;
        }
        Ok(())
    }

    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.item_id == item_id)
    }

    /// Menu badge: how many of this item are in the cart
    pub async fn quantity_in_cart<H: HttpClient>(state: &AppState<H>, item_id: &str) -> u32 {
        state.cart.read().await.quantity_of(item_id)
    }

    /// Add one unit of a menu item to the cart (login required)
    pub async fn add_to_cart<H: HttpClient>(
        &self,
        state: &AppState<H>,
        item_id: &str,
        confirm: &dyn Confirm,
    ) -> AppResult<AddOutcome> {
        if !state.session.read().await.is_authenticated() {
            state.notifier.error("Please login to add items to cart");
            return Err(AppError::LoginRequired(UserRole::Customer));
        }

        let restaurant = self
            .restaurant
            .as_ref()
            .ok_or_else(|| reported(state, AppError::validation(ErrorCode::RestaurantNotFound), ""))?;
        let item = self
            .find_item(item_id)
            .filter(|item| item.is_available)
            .ok_or_else(|| {
                reported(state, AppError::validation(ErrorCode::MenuItemUnavailable), "")
            })?;

        let outcome = state
            .cart
            .write()
            .await
            .add_item(item, restaurant, confirm)
            .map_err(|e| reported(state, e, "Failed to update cart"))?;

        if outcome != AddOutcome::Declined {
            state.notifier.success(format!("{} added to cart!", item.name));
        }
        Ok(outcome)
    }

    /// Latest availability answer
    pub fn availability(&self) -> Option<Availability> {
        self.availability
    }

    /// Booking is enabled only after a positive availability check
    pub fn can_book(&self) -> bool {
        self.availability.is_some_and(|a| a.available)
    }

    /// Ask the backend for free seats at the form's date and time
    pub async fn check_availability<H: HttpClient>(
        &mut self,
        state: &AppState<H>,
    ) -> AppResult<Availability> {
        if self.form.date.trim().is_empty() || self.form.time.trim().is_empty() {
            return Err(reported(
                state,
                AppError::validation(ErrorCode::ReservationSlotRequired),
                "",
            ));
        }

        let availability = state
            .api
            .check_availability(&self.restaurant_id, &self.form.date, &self.form.time)
            .await
            .map_err(|e| super::reported_generic(state, e, "Error checking availability"))?;

        tracing::debug!(
            restaurant_id = %self.restaurant_id,
            date = %self.form.date,
            time = %self.form.time,
            seats = availability.available_seats,
            "Availability checked"
        );
        if availability.available {
            state
                .notifier
                .success(format!("{} seats available!", availability.available_seats));
        } else {
            state.notifier.error(ErrorCode::NoSeatsAvailable.message());
        }
        self.availability = Some(availability);
        Ok(availability)
    }

    /// Create the reservation and hand over to the hosted payment page
    pub async fn book<H: HttpClient>(&self, state: &AppState<H>) -> AppResult<Navigation> {
        {
            let session = state.session.read().await;
            if !session.is_authenticated() {
                state.notifier.error("Please login to make a reservation");
                return Err(AppError::LoginRequired(UserRole::Customer));
            }
            if !session.is_customer() {
                let err = AppError::Forbidden("Only customers can make reservations".into());
                return Err(reported(state, err, ""));
            }
        }
        if !self.can_book() {
            return Err(reported(
                state,
                AppError::validation(ErrorCode::AvailabilityNotChecked),
                "",
            ));
        }

        let reservation = state
            .api
            .create_reservation(&ReservationCreate {
                restaurant_id: self.restaurant_id.clone(),
                date: self.form.date.clone(),
                time: self.form.time.clone(),
                party_size: self.form.party_size,
            })
            .await
            .map_err(|e| reported(state, e, "Failed to create reservation"))?;

        tracing::info!(
            reservation_id = %reservation.reservation_id,
            amount = reservation.amount,
            "Reservation created, starting checkout"
        );

        let session = state
            .api
            .create_checkout(&CheckoutRequest {
                payment_type: PaymentType::Reservation,
                reference_id: reservation.reservation_id.clone(),
                origin_url: state.config.origin_url.clone(),
            })
            .await
            .map_err(|e| reported(state, e, "Failed to create reservation"))?;

        Ok(Navigation::External(session.url))
    }
}
