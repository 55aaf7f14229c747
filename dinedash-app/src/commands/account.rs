//! login / signup / logout / whoami

use dinedash_client::{HttpClient, SignupRequest};
use shared::models::{RestaurantCreate, ServiceType, UserRole};

use super::{invalid, print_navigation};
use crate::cli::args::{LoginArgs, RestaurantProfileArgs, SignupArgs};
use crate::core::{AppResult, AppState};
use crate::pages::auth;

pub async fn login<H: HttpClient>(state: &AppState<H>, args: LoginArgs) -> AppResult<()> {
    let role = UserRole::from(args.role);
    let (profile, nav) = auth::login(state, &role, &args.email, &args.password).await?;
    println!("Logged in as {} <{}> ({})", profile.name, profile.email, profile.role);
    print_navigation(&nav);
    Ok(())
}

pub async fn signup<H: HttpClient>(state: &AppState<H>, args: SignupArgs) -> AppResult<()> {
    let req = SignupRequest {
        email: args.email,
        password: args.password,
        name: args.name,
        phone: args.phone,
    };

    match UserRole::from(args.role) {
        UserRole::Customer => {
            let (profile, nav) = auth::customer_signup(state, &req).await?;
            println!("Welcome, {}!", profile.name);
            print_navigation(&nav);
        }
        UserRole::Restaurant => {
            // checked before the account exists
            let details = &args.restaurant;
            let name = details
                .restaurant_name
                .clone()
                .ok_or_else(|| invalid(state, "--restaurant-name is required for restaurant signup"))?;

            let pending = auth::restaurant_signup(state, &req).await?;
            let profile = restaurant_profile(pending.profile_template(), name, details, &req);
            let nav = auth::complete_restaurant_profile(state, &pending, &profile).await?;
            println!("Restaurant account {} is ready", pending.email());
            print_navigation(&nav);
        }
        other => return Err(invalid(state, format!("Cannot sign up as {}", other))),
    }
    Ok(())
}

/// Profile form filled from the flags, falling back to account details
fn restaurant_profile(
    template: RestaurantCreate,
    name: String,
    details: &RestaurantProfileArgs,
    account: &SignupRequest,
) -> RestaurantCreate {
    RestaurantCreate {
        name,
        description: details.description.clone().unwrap_or_default(),
        cuisine: details.cuisine.clone().unwrap_or_default(),
        address: details.address.clone().unwrap_or_default(),
        phone: details
            .restaurant_phone
            .clone()
            .or_else(|| account.phone.clone())
            .unwrap_or_default(),
        hours: details.hours.clone().unwrap_or(template.hours),
        service_type: details
            .service_type
            .as_deref()
            .map(ServiceType::from)
            .unwrap_or(template.service_type),
        is_veg: details.veg,
        is_non_veg: details.non_veg,
        seat_capacity: details.seats.unwrap_or(template.seat_capacity),
        slot_length_minutes: details.slot_minutes.unwrap_or(template.slot_length_minutes),
        image_url: details.image_url.clone().unwrap_or_default(),
        logo_url: template.logo_url,
    }
}

pub async fn logout<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    let nav = auth::logout(state).await?;
    print_navigation(&nav);
    Ok(())
}

pub async fn whoami<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    match state.current_user().await {
        Some(user) => println!("{} <{}> ({}) id {}", user.name, user.email, user.role, user.user_id),
        None => println!("Not logged in"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_profile_defaults() {
        let account = SignupRequest {
            email: "owner@dosa.in".into(),
            password: "pw".into(),
            name: "Owner".into(),
            phone: Some("9876543210".into()),
        };
        let template = RestaurantCreate {
            hours: "9:00 AM - 10:00 PM".into(),
            ..Default::default()
        };
        let details = RestaurantProfileArgs {
            service_type: Some("delivery".into()),
            veg: true,
            ..Default::default()
        };

        let p = restaurant_profile(template, "Dosa Corner".into(), &details, &account);
        assert_eq!(p.name, "Dosa Corner");
        assert_eq!(p.phone, "9876543210");
        assert_eq!(p.hours, "9:00 AM - 10:00 PM");
        assert_eq!(p.service_type, ServiceType::Delivery);
        assert!(p.is_veg && !p.is_non_veg);
        assert_eq!(p.seat_capacity, 20);
        assert_eq!(p.slot_length_minutes, 60);
    }
}
