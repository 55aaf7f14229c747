// dinedash-app/tests/owner_and_admin.rs
// Restaurant owner area and admin console

mod common;

use common::{MockData, TestApp, messages, order_json};
use dinedash_app::core::{AppError, AutoConfirm, DashboardTab, Route};
use dinedash_app::pages::admin::{AdminDashboard, AdminFilter};
use dinedash_app::pages::auth;
use dinedash_app::pages::restaurant_dashboard::{self, MenuManager, RestaurantDashboard};
use dinedash_app::Navigation;
use dinedash_client::SignupRequest;
use serde_json::json;
use shared::models::{
    MenuCategoryCreate, MenuItemCreate, OrderStatus, RestaurantCreate, RestaurantStatus, ServiceType,
    UserRole, UserStatus,
};

fn owner_signup() -> SignupRequest {
    SignupRequest {
        email: "ravi@dosa.in".into(),
        password: "secret".into(),
        name: "Ravi".into(),
        phone: Some("9876543210".into()),
    }
}

fn with_orders() -> MockData {
    MockData {
        orders: vec![
            order_json("o1", "r1", "PLACED", 200.0),
            order_json("o2", "r1", "DELIVERED", 150.5),
            order_json("o3", "r3", "PREPARING", 99.0),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_restaurant_signup_is_two_step() {
    let app = TestApp::new().await;
    let mut rx = app.state.notifier.subscribe();

    let pending = auth::restaurant_signup(&app.state, &owner_signup())
        .await
        .unwrap();
    assert!(!app.state.session.read().await.is_authenticated());

    let mut profile = pending.profile_template();
    profile.name = "Dosa Plaza".into();
    let nav = auth::complete_restaurant_profile(&app.state, &pending, &profile)
        .await
        .unwrap();

    assert_eq!(
        nav,
        Navigation::To(Route::RestaurantDashboard(DashboardTab::Orders))
    );
    assert!(app.state.session.read().await.is_restaurant());
    assert_eq!(
        messages(&mut rx),
        vec![
            "Account created! Now add your restaurant details.",
            "Restaurant profile created successfully!"
        ]
    );
    let data = app.data();
    let created = data.restaurants.last().unwrap();
    assert_eq!(created["name"], "Dosa Plaza");
    assert_eq!(created["hours"], "9:00 AM - 10:00 PM");
}

#[tokio::test]
async fn test_failed_restaurant_profile_leaves_no_session() {
    let app = TestApp::with_data(MockData {
        fail_restaurant_create: true,
        ..Default::default()
    })
    .await;

    let pending = auth::restaurant_signup(&app.state, &owner_signup())
        .await
        .unwrap();
    let mut profile = pending.profile_template();
    profile.name = "Dosa Plaza".into();
    assert!(
        auth::complete_restaurant_profile(&app.state, &pending, &profile)
            .await
            .is_err()
    );

    assert!(!app.state.session.read().await.is_authenticated());
    assert_eq!(app.state.api.token().await, None);
}

#[tokio::test]
async fn test_owner_updates_order_status() {
    let app = TestApp::with_data(with_orders()).await;
    app.login_as(UserRole::Restaurant).await;
    let mut rx = app.state.notifier.subscribe();

    let mut dash = RestaurantDashboard::new(DashboardTab::Orders);
    dash.load(&app.state).await.unwrap();
    assert_eq!(dash.orders.len(), 2);

    dash.update_order_status(&app.state, "o1", &OrderStatus::Accepted)
        .await
        .unwrap();
    assert_eq!(messages(&mut rx), vec!["Order status updated"]);
    assert_eq!(dash.orders[0].status, OrderStatus::Accepted);
    assert_eq!(
        app.data().status_updates,
        vec![("orders/o1".to_string(), "ACCEPTED".to_string())]
    );
}

#[tokio::test]
async fn test_dashboard_requires_owner() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Customer).await;

    let mut dash = RestaurantDashboard::new(DashboardTab::Reservations);
    let err = dash.load(&app.state).await.unwrap_err();
    assert!(matches!(err, AppError::LoginRequired(UserRole::Restaurant)));
}

#[tokio::test]
async fn test_restaurant_home_summary() {
    let app = TestApp::with_data(with_orders()).await;
    app.login_as(UserRole::Restaurant).await;

    let summary = restaurant_dashboard::summary(&app.state)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.restaurant.restaurant_id, "r1");
    assert_eq!(summary.total_orders, 2);
    assert_eq!(summary.pending_orders, 1);
    assert_eq!(summary.revenue, 350.5);
    assert_eq!(summary.menu_items, 3);
}

#[tokio::test]
async fn test_menu_manager_adds_category_and_item() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Restaurant).await;

    let mut menu = MenuManager::open(&app.state).await.unwrap().unwrap();
    assert_eq!(menu.categories.len(), 1);
    assert_eq!(menu.item_count(), 3);

    let category = menu
        .add_category(
            &app.state,
            &MenuCategoryCreate {
                name: "Desserts".into(),
                display_order: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(menu.categories.len(), 2);

    menu.add_item(
        &app.state,
        &MenuItemCreate {
            category_id: category.category_id.clone(),
            name: "Payasam".into(),
            description: "Rice kheer".into(),
            price: 60.0,
            image_url: None,
            is_veg: true,
            is_available: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(menu.item_count(), 4);
    assert!(
        menu.menu
            .iter()
            .any(|s| s.category.name == "Desserts" && s.items.len() == 1)
    );
}

#[tokio::test]
async fn test_owner_updates_restaurant_profile() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Restaurant).await;
    let mut rx = app.state.notifier.subscribe();

    let mut menu = MenuManager::open(&app.state).await.unwrap().unwrap();
    let profile = RestaurantCreate {
        name: "Dosa Corner Express".into(),
        cuisine: "South Indian".into(),
        hours: "8:00 AM - 11:00 PM".into(),
        service_type: ServiceType::Delivery,
        ..Default::default()
    };
    menu.update_profile(&app.state, &profile).await.unwrap();

    assert_eq!(menu.restaurant.name, "Dosa Corner Express");
    assert_eq!(menu.restaurant.service_type, ServiceType::Delivery);
    assert_eq!(messages(&mut rx), vec!["Restaurant updated"]);
    assert_eq!(app.data().restaurants[0]["hours"], "8:00 AM - 11:00 PM");
}

#[tokio::test]
async fn test_admin_console_requires_admin() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Customer).await;

    let err = AdminDashboard::default()
        .load(&app.state)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::LoginRequired(UserRole::Admin)));
}

#[tokio::test]
async fn test_admin_filters() {
    let app = TestApp::with_data(with_orders()).await;
    app.login_as(UserRole::Admin).await;

    let mut dash = AdminDashboard::default();
    dash.load(&app.state).await.unwrap();
    assert_eq!(dash.stats.total_orders, 3);
    assert_eq!(dash.recent_orders().len(), 3);

    dash.filter = AdminFilter::new("DOSA", Some("all".into()));
    let ids: Vec<&str> = dash
        .filtered_orders()
        .iter()
        .map(|o| o.order.order_id.as_str())
        .collect();
    assert_eq!(ids, vec!["o1", "o2"]);

    dash.filter = AdminFilter::new("", Some("DELIVERED".into()));
    assert_eq!(dash.filtered_orders().len(), 1);

    dash.filter = AdminFilter::new("o3", None);
    assert_eq!(dash.filtered_orders().len(), 1);

    // the status filter does not apply to users
    dash.filter = AdminFilter::new("asha", Some("suspended".into()));
    assert_eq!(dash.filtered_users().len(), 1);
}

#[tokio::test]
async fn test_admin_suspends_restaurant() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Admin).await;
    let mut rx = app.state.notifier.subscribe();

    let mut dash = AdminDashboard::default();
    dash.load(&app.state).await.unwrap();
    dash.set_restaurant_status(&app.state, "r1", &RestaurantStatus::Suspended)
        .await
        .unwrap();

    assert_eq!(messages(&mut rx), vec!["Restaurant suspended"]);
    let r1 = dash
        .restaurants
        .iter()
        .find(|r| r.restaurant.restaurant_id == "r1")
        .unwrap();
    assert_eq!(r1.restaurant.status, RestaurantStatus::Suspended);

    dash.set_user_status(&app.state, "cust-1", &UserStatus::Suspended)
        .await
        .unwrap();
    assert_eq!(app.data().users[0]["status"], json!("suspended"));
}

#[tokio::test]
async fn test_admin_delete_needs_confirmation() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Admin).await;

    let mut dash = AdminDashboard::default();
    dash.load(&app.state).await.unwrap();

    let deleted = dash
        .delete_restaurant(&app.state, "r3", &AutoConfirm(false))
        .await
        .unwrap();
    assert!(!deleted);
    assert!(app.data().deleted.is_empty());

    let deleted = dash
        .delete_restaurant(&app.state, "r3", &AutoConfirm(true))
        .await
        .unwrap();
    assert!(deleted);
    assert_eq!(dash.restaurants.len(), 2);
}

#[tokio::test]
async fn test_admin_delete_user_shows_backend_reason() {
    let app = TestApp::new().await;
    app.login_as(UserRole::Admin).await;
    let mut rx = app.state.notifier.subscribe();

    let mut dash = AdminDashboard::default();
    dash.load(&app.state).await.unwrap();
    assert!(
        dash.delete_user(&app.state, "owner-1", &AutoConfirm(true))
            .await
            .is_err()
    );
    assert_eq!(
        messages(&mut rx),
        vec!["Cannot delete a user who owns restaurants"]
    );
    assert_eq!(dash.users.len(), 2);
}
