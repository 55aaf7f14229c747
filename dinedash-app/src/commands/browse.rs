//! Browsing, restaurant page, table booking and favorites

use dinedash_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{DietFilter, RestaurantQuery, ServiceType};

use super::{output, print_navigation};
use crate::cli::args::{BrowseArgs, SlotArgs};
use crate::core::{AppError, AppResult, AppState};
use crate::pages::favorites::{self, FavoritesPage};
use crate::pages::home::HomePage;
use crate::pages::restaurant::RestaurantPage;
use crate::pages::Navigation;

pub async fn restaurants<H: HttpClient>(state: &AppState<H>, args: BrowseArgs) -> AppResult<()> {
    let mut page = HomePage::new(RestaurantQuery {
        search: args.search,
        diet: args.diet.map(Into::into),
        service_type: args.service_type.as_deref().map(ServiceType::from),
        cuisine: args.cuisine,
    });
    output::restaurants(page.load(state).await?);
    let in_cart = HomePage::cart_count(state).await;
    if in_cart > 0 {
        println!("Cart: {in_cart} item(s)");
    }
    Ok(())
}

/// Load a restaurant page, a missing restaurant is an error
pub(crate) async fn open_restaurant<H: HttpClient>(
    state: &AppState<H>,
    restaurant_id: &str,
    diet: Option<DietFilter>,
) -> AppResult<RestaurantPage> {
    let mut page = RestaurantPage::new(restaurant_id);
    page.diet = diet;
    match page.load(state).await {
        Navigation::Stay => Ok(page),
        nav => {
            print_navigation(&nav);
            Err(AppError::validation(ErrorCode::RestaurantNotFound))
        }
    }
}

pub async fn restaurant<H: HttpClient>(
    state: &AppState<H>,
    restaurant_id: &str,
    diet: Option<DietFilter>,
) -> AppResult<()> {
    let page = open_restaurant(state, restaurant_id, diet).await?;
    let Some(restaurant) = page.restaurant.as_ref() else {
        return Ok(());
    };
    output::restaurant(restaurant);

    if page.shows_delivery() {
        let cart = state.cart.read().await;
        output::menu(&page.menu, |item_id| cart.quantity_of(item_id));
    }
    if page.shows_reservations() {
        println!(
            "\nTable booking: {} seats, {} min slots",
            restaurant.seat_capacity, restaurant.slot_length_minutes
        );
        println!(
            "  dinedash reserve {} --date YYYY-MM-DD --time HH:MM",
            restaurant.restaurant_id
        );
    }
    Ok(())
}

fn booking_page(slot: SlotArgs) -> RestaurantPage {
    let mut page = RestaurantPage::new(slot.restaurant_id);
    page.form.date = slot.date;
    page.form.time = slot.time;
    page
}

pub async fn availability<H: HttpClient>(state: &AppState<H>, slot: SlotArgs) -> AppResult<()> {
    let mut page = booking_page(slot);
    let availability = page.check_availability(state).await?;
    println!(
        "{} at {}: {} seats available",
        page.form.date, page.form.time, availability.available_seats
    );
    Ok(())
}

/// Check availability, then book and hand over to payment
pub async fn reserve<H: HttpClient>(
    state: &AppState<H>,
    slot: SlotArgs,
    party_size: u32,
) -> AppResult<()> {
    let mut page = booking_page(slot);
    page.form.party_size = party_size;

    page.check_availability(state).await?;
    if !page.can_book() {
        // "No seats available" was already shown
        return Err(AppError::validation(ErrorCode::NoSeatsAvailable));
    }
    let nav = page.book(state).await?;
    print_navigation(&nav);
    Ok(())
}

pub async fn favorites<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    let mut page = FavoritesPage::default();
    let list = page.load(state).await?;
    if list.is_empty() {
        println!("Start adding restaurants to your favorites to see them here");
    } else {
        output::restaurants(list);
    }
    Ok(())
}

pub async fn add_favorite<H: HttpClient>(state: &AppState<H>, restaurant_id: &str) -> AppResult<()> {
    favorites::add(state, restaurant_id).await
}

pub async fn remove_favorite<H: HttpClient>(
    state: &AppState<H>,
    restaurant_id: &str,
) -> AppResult<()> {
    let mut page = FavoritesPage::default();
    page.load(state).await?;
    page.remove(state, restaurant_id).await?;
    output::restaurants(&page.restaurants);
    Ok(())
}
