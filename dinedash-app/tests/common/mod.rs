// dinedash-app/tests/common/mod.rs
// In-process mock of the DineDash REST API for app-level tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use dinedash_app::core::{AppConfig, Notification};
use dinedash_app::AppState;
use dinedash_client::{DineDashClient, OneshotHttpClient};
use serde_json::{Value, json};
use shared::models::UserRole;
use tokio::sync::broadcast;

pub const CUSTOMER_TOKEN: &str = "tok-customer";
pub const OWNER_TOKEN: &str = "tok-owner";
pub const ADMIN_TOKEN: &str = "tok-admin";
pub const SESSION_ID: &str = "cs_test_1";

/// Mutable backend data, inspected by tests
#[derive(Debug)]
pub struct MockData {
    pub restaurants: Vec<Value>,
    pub categories: Vec<Value>,
    pub items: Vec<Value>,
    pub orders: Vec<Value>,
    pub reservations: Vec<Value>,
    pub favorites: Vec<String>,
    pub users: Vec<Value>,
    pub available_seats: i32,
    /// Poll number on which the payment turns paid, `None` never
    pub paid_on_poll: Option<u32>,
    pub payment_polls: u32,
    /// Answer every payment status request with a 500
    pub fail_payment_status: bool,
    pub fail_restaurant_create: bool,
    /// (path, status) of every status update received
    pub status_updates: Vec<(String, String)>,
    pub deleted: Vec<String>,
}

impl Default for MockData {
    fn default() -> Self {
        Self {
            restaurants: vec![
                restaurant_json("r1", "owner-1", "Dosa Corner", "both"),
                restaurant_json("r2", "owner-2", "Spice Route", "reservations"),
                restaurant_json("r3", "owner-3", "Tandoor Express", "delivery"),
            ],
            categories: vec![
                json!({"category_id": "c1", "restaurant_id": "r1", "name": "Mains", "display_order": 0}),
                json!({"category_id": "c2", "restaurant_id": "r3", "name": "Starters", "display_order": 0}),
            ],
            items: vec![
                item_json("i1", "r1", "c1", "Masala Dosa", 90.0, true, true),
                item_json("i2", "r1", "c1", "Chicken Chettinad", 220.0, false, true),
                item_json("i3", "r1", "c1", "Rava Idli", 70.0, true, false),
                item_json("t1", "r3", "c2", "Paneer Tikka", 180.0, true, true),
            ],
            orders: Vec::new(),
            reservations: Vec::new(),
            favorites: vec!["r2".into()],
            users: vec![
                json!({"user_id": "cust-1", "email": "asha@example.com", "name": "Asha",
                       "role": "customer", "status": "active", "order_count": 2}),
                json!({"user_id": "owner-1", "email": "ravi@dosa.in", "name": "Ravi",
                       "role": "restaurant", "status": "active"}),
            ],
            available_seats: 12,
            paid_on_poll: Some(2),
            payment_polls: 0,
            fail_payment_status: false,
            fail_restaurant_create: false,
            status_updates: Vec::new(),
            deleted: Vec::new(),
        }
    }
}

pub type Shared = Arc<Mutex<MockData>>;

pub fn restaurant_json(id: &str, owner: &str, name: &str, service_type: &str) -> Value {
    json!({
        "restaurant_id": id, "owner_id": owner, "name": name, "cuisine": "South Indian",
        "service_type": service_type, "is_veg": true, "is_non_veg": true,
        "seat_capacity": 20, "slot_length_minutes": 60, "image_url": "", "status": "approved"
    })
}

pub fn item_json(
    id: &str,
    restaurant: &str,
    category: &str,
    name: &str,
    price: f64,
    is_veg: bool,
    is_available: bool,
) -> Value {
    json!({
        "item_id": id, "restaurant_id": restaurant, "category_id": category, "name": name,
        "price": price, "is_veg": is_veg, "is_available": is_available
    })
}

pub fn order_json(id: &str, restaurant: &str, status: &str, total: f64) -> Value {
    json!({
        "order_id": id, "user_id": "cust-1", "restaurant_id": restaurant,
        "items": [{"item_id": "i1", "name": "Masala Dosa", "price": total, "quantity": 1}],
        "total_amount": total, "delivery_address": "12 MG Road", "delivery_phone": "9876543210",
        "payment_method": "COD", "payment_status": "pending", "status": status,
        "created_at": "2026-10-16T12:00:00"
    })
}

fn lock(data: &Shared) -> MutexGuard<'_, MockData> {
    data.lock().unwrap()
}

fn role_of(headers: &HeaderMap) -> Option<&'static str> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))?;
    match token {
        CUSTOMER_TOKEN => Some("customer"),
        OWNER_TOKEN => Some("restaurant"),
        ADMIN_TOKEN => Some("admin"),
        _ => None,
    }
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "Not authenticated")
}

fn require(headers: &HeaderMap, role: &str) -> Result<(), Response> {
    match role_of(headers) {
        Some(r) if r == role => Ok(()),
        Some(_) => Err(error(StatusCode::FORBIDDEN, "Forbidden")),
        None => Err(unauthorized()),
    }
}

fn token_for(role: &str, email: &str) -> Value {
    let (token, user_id, name) = match role {
        "restaurant" => (OWNER_TOKEN, "owner-1", "Ravi"),
        "admin" => (ADMIN_TOKEN, "admin-1", "Admin"),
        _ => (CUSTOMER_TOKEN, "cust-1", "Asha"),
    };
    json!({"token": token, "user_id": user_id, "email": email, "name": name, "role": role})
}

// ========== Handlers ==========

async fn login(Path(role): Path<String>, Json(body): Json<Value>) -> Response {
    if body["password"] != "secret" {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(token_for(&role, body["email"].as_str().unwrap_or_default())).into_response()
}

async fn signup(Path(role): Path<String>, Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@example.com" {
        return error(StatusCode::BAD_REQUEST, "Email already registered");
    }
    Json(token_for(&role, body["email"].as_str().unwrap_or_default())).into_response()
}

async fn list_restaurants(
    State(data): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let data = lock(&data);
    let search = q.get("search").map(|s| s.to_lowercase());
    Json(
        data.restaurants
            .iter()
            .filter(|r| match &search {
                Some(s) => r["name"]
                    .as_str()
                    .is_some_and(|n| n.to_lowercase().contains(s)),
                None => true,
            })
            .cloned()
            .collect(),
    )
}

async fn get_restaurant(State(data): State<Shared>, Path(id): Path<String>) -> Response {
    let data = lock(&data);
    match data.restaurants.iter().find(|r| r["restaurant_id"] == id) {
        Some(r) => Json(r.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Restaurant not found"),
    }
}

async fn create_restaurant(
    State(data): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = require(&headers, "restaurant") {
        return resp;
    }
    let mut data = lock(&data);
    if data.fail_restaurant_create {
        return error(StatusCode::BAD_REQUEST, "Invalid restaurant details");
    }
    let mut restaurant = body;
    restaurant["restaurant_id"] = json!("r-new");
    restaurant["owner_id"] = json!("owner-1");
    data.restaurants.push(restaurant.clone());
    Json(restaurant).into_response()
}

async fn update_restaurant(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = require(&headers, "restaurant") {
        return resp;
    }
    let mut data = lock(&data);
    let Some(existing) = data.restaurants.iter_mut().find(|r| r["restaurant_id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Restaurant not found");
    };
    if let (Some(target), Some(fields)) = (existing.as_object_mut(), body.as_object()) {
        for (k, v) in fields {
            target.insert(k.clone(), v.clone());
        }
    }
    Json(json!({"message": "Restaurant updated"})).into_response()
}

async fn menu(
    State(data): State<Shared>,
    Path(id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let data = lock(&data);
    let diet = q.get("diet").cloned();
    let sections = data
        .categories
        .iter()
        .filter(|c| c["restaurant_id"] == id)
        .map(|c| {
            let items: Vec<Value> = data
                .items
                .iter()
                .filter(|i| i["restaurant_id"] == id && i["category_id"] == c["category_id"])
                .filter(|i| match diet.as_deref() {
                    Some("veg") => i["is_veg"] == true,
                    Some("non_veg") => i["is_veg"] == false,
                    _ => true,
                })
                .cloned()
                .collect();
            let mut section = c.clone();
            section["items"] = json!(items);
            section
        })
        .collect();
    Json(sections)
}

async fn list_categories(State(data): State<Shared>, Path(id): Path<String>) -> Json<Vec<Value>> {
    let data = lock(&data);
    Json(
        data.categories
            .iter()
            .filter(|c| c["restaurant_id"] == id)
            .cloned()
            .collect(),
    )
}

async fn create_category(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = require(&headers, "restaurant") {
        return resp;
    }
    let mut data = lock(&data);
    let category = json!({
        "category_id": format!("c{}", data.categories.len() + 1),
        "restaurant_id": id,
        "name": body["name"],
        "display_order": body["display_order"],
    });
    data.categories.push(category.clone());
    Json(category).into_response()
}

async fn create_item(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = require(&headers, "restaurant") {
        return resp;
    }
    let mut data = lock(&data);
    let mut item = body;
    item["item_id"] = json!(format!("i{}", data.items.len() + 1));
    item["restaurant_id"] = json!(id);
    data.items.push(item.clone());
    Json(item).into_response()
}

async fn availability(State(data): State<Shared>, Path(id): Path<String>) -> Response {
    let data = lock(&data);
    if !data.restaurants.iter().any(|r| r["restaurant_id"] == id) {
        return error(StatusCode::NOT_FOUND, "Restaurant not found");
    }
    let seats = data.available_seats;
    Json(json!({"available": seats > 0, "available_seats": seats})).into_response()
}

async fn create_order(
    State(data): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    let mut data = lock(&data);
    let total: f64 = body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|i| i["price"].as_f64().unwrap_or(0.0) * i["quantity"].as_f64().unwrap_or(0.0))
                .sum()
        })
        .unwrap_or(0.0);
    let mut order = body;
    order["order_id"] = json!(format!("o{}", data.orders.len() + 1));
    order["user_id"] = json!("cust-1");
    order["total_amount"] = json!(total);
    order["status"] = json!("PLACED");
    order["payment_status"] = json!("pending");
    data.orders.push(order.clone());
    Json(order).into_response()
}

async fn list_orders(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    Json(lock(&data).orders.clone()).into_response()
}

async fn get_order(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    let data = lock(&data);
    match data.orders.iter().find(|o| o["order_id"] == id) {
        Some(o) => Json(o.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Order not found"),
    }
}

fn set_status(list: &mut [Value], key: &str, id: &str, status: &Value) -> bool {
    match list.iter_mut().find(|v| v[key] == id) {
        Some(row) => {
            row["status"] = status.clone();
            true
        }
        None => false,
    }
}

async fn update_order_status(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !matches!(role_of(&headers), Some("restaurant" | "admin")) {
        return error(StatusCode::FORBIDDEN, "Forbidden");
    }
    let mut data = lock(&data);
    if !set_status(&mut data.orders, "order_id", &id, &body["status"]) {
        return error(StatusCode::NOT_FOUND, "Order not found");
    }
    let status = body["status"].as_str().unwrap_or_default().to_string();
    data.status_updates.push((format!("orders/{}", id), status));
    Json(json!({"message": "Order status updated"})).into_response()
}

async fn create_reservation(
    State(data): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    let mut data = lock(&data);
    if data.available_seats <= 0 {
        return error(StatusCode::BAD_REQUEST, "Not enough seats available");
    }
    let mut reservation = body;
    reservation["reservation_id"] = json!(format!("res{}", data.reservations.len() + 1));
    reservation["user_id"] = json!("cust-1");
    reservation["amount"] = json!(100.0 * reservation["party_size"].as_f64().unwrap_or(1.0));
    reservation["status"] = json!("PENDING_PAYMENT");
    reservation["payment_status"] = json!("pending");
    data.reservations.push(reservation.clone());
    Json(reservation).into_response()
}

async fn list_reservations(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    Json(lock(&data).reservations.clone()).into_response()
}

async fn get_reservation(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    let data = lock(&data);
    match data.reservations.iter().find(|r| r["reservation_id"] == id) {
        Some(r) => Json(r.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Reservation not found"),
    }
}

async fn update_reservation_status(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !matches!(role_of(&headers), Some("restaurant" | "admin")) {
        return error(StatusCode::FORBIDDEN, "Forbidden");
    }
    let mut data = lock(&data);
    if !set_status(&mut data.reservations, "reservation_id", &id, &body["status"]) {
        return error(StatusCode::NOT_FOUND, "Reservation not found");
    }
    let status = body["status"].as_str().unwrap_or_default().to_string();
    data.status_updates.push((format!("reservations/{}", id), status));
    Json(json!({"message": "Reservation status updated"})).into_response()
}

async fn restaurant_orders(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "restaurant") {
        return resp;
    }
    let data = lock(&data);
    Json(
        data.orders
            .iter()
            .filter(|o| o["restaurant_id"] == "r1")
            .cloned()
            .collect::<Vec<_>>(),
    )
    .into_response()
}

async fn restaurant_reservations(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "restaurant") {
        return resp;
    }
    let data = lock(&data);
    Json(
        data.reservations
            .iter()
            .filter(|r| r["restaurant_id"] == "r1")
            .cloned()
            .collect::<Vec<_>>(),
    )
    .into_response()
}

async fn list_favorites(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "customer") {
        return resp;
    }
    let data = lock(&data);
    Json(
        data.restaurants
            .iter()
            .filter(|r| {
                r["restaurant_id"]
                    .as_str()
                    .is_some_and(|id| data.favorites.iter().any(|f| f == id))
            })
            .cloned()
            .collect::<Vec<_>>(),
    )
    .into_response()
}

async fn add_favorite(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = require(&headers, "customer") {
        return resp;
    }
    let mut data = lock(&data);
    if !data.restaurants.iter().any(|r| r["restaurant_id"] == id) {
        return error(StatusCode::NOT_FOUND, "Restaurant not found");
    }
    if !data.favorites.contains(&id) {
        data.favorites.push(id);
    }
    Json(json!({"message": "Added to favorites"})).into_response()
}

async fn remove_favorite(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = require(&headers, "customer") {
        return resp;
    }
    lock(&data).favorites.retain(|f| *f != id);
    Json(json!({"message": "Removed from favorites"})).into_response()
}

async fn checkout(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    let origin = body["origin_url"].as_str().unwrap_or_default();
    Json(json!({
        "url": format!("https://checkout.stripe.test/pay/{}?return={}", SESSION_ID, origin),
        "session_id": SESSION_ID,
    }))
    .into_response()
}

async fn payment_status(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> Response {
    if role_of(&headers).is_none() {
        return unauthorized();
    }
    let mut data = lock(&data);
    data.payment_polls += 1;
    if data.fail_payment_status {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Stripe unavailable");
    }
    let paid = data.paid_on_poll.is_some_and(|n| data.payment_polls >= n);
    Json(json!({
        "transaction_id": "tx-1", "session_id": session_id, "amount": 350.0, "currency": "inr",
        "payment_type": "order", "reference_id": "o1",
        "payment_status": if paid { "paid" } else { "pending" },
    }))
    .into_response()
}

// ========== Admin ==========

async fn admin_stats(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    let data = lock(&data);
    Json(json!({
        "total_users": data.users.len(), "total_restaurants": data.restaurants.len(),
        "total_orders": data.orders.len(), "total_reservations": data.reservations.len(),
        "pending_orders": 1, "pending_reservations": 0,
        "total_revenue": 1500.0, "order_revenue": 1200.0, "reservation_revenue": 300.0,
        "recent_orders": data.orders.len(), "recent_reservations": 0
    }))
    .into_response()
}

async fn admin_restaurants(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    let data = lock(&data);
    let rows: Vec<Value> = data
        .restaurants
        .iter()
        .map(|r| {
            let mut row = r.clone();
            row["owner"] = json!({"name": "Ravi", "email": "ravi@dosa.in"});
            row["order_count"] = json!(3);
            row
        })
        .collect();
    Json(rows).into_response()
}

async fn admin_orders(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    let data = lock(&data);
    let rows: Vec<Value> = data
        .orders
        .iter()
        .map(|o| {
            let mut row = o.clone();
            let name = data
                .restaurants
                .iter()
                .find(|r| r["restaurant_id"] == o["restaurant_id"])
                .map(|r| r["name"].clone())
                .unwrap_or(Value::Null);
            row["restaurant_name"] = name;
            row
        })
        .collect();
    Json(rows).into_response()
}

async fn admin_reservations(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    Json(lock(&data).reservations.clone()).into_response()
}

async fn admin_users(State(data): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    Json(lock(&data).users.clone()).into_response()
}

async fn admin_set_status(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path((kind, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    let mut data = lock(&data);
    let status = body["status"].clone();
    let found = match kind.as_str() {
        "restaurants" => set_status(&mut data.restaurants, "restaurant_id", &id, &status),
        "orders" => set_status(&mut data.orders, "order_id", &id, &status),
        "reservations" => set_status(&mut data.reservations, "reservation_id", &id, &status),
        "users" => set_status(&mut data.users, "user_id", &id, &status),
        _ => false,
    };
    if !found {
        return error(StatusCode::NOT_FOUND, "Not found");
    }
    data.status_updates.push((
        format!("admin/{}/{}", kind, id),
        status.as_str().unwrap_or_default().to_string(),
    ));
    Json(json!({"message": "Status updated"})).into_response()
}

async fn admin_delete(
    State(data): State<Shared>,
    headers: HeaderMap,
    Path((kind, id)): Path<(String, String)>,
) -> Response {
    if let Err(resp) = require(&headers, "admin") {
        return resp;
    }
    let mut data = lock(&data);
    match kind.as_str() {
        "restaurants" => data.restaurants.retain(|r| r["restaurant_id"] != id),
        "users" => {
            if id == "owner-1" {
                return error(
                    StatusCode::BAD_REQUEST,
                    "Cannot delete a user who owns restaurants",
                );
            }
            data.users.retain(|u| u["user_id"] != id)
        }
        _ => return error(StatusCode::NOT_FOUND, "Not found"),
    }
    data.deleted.push(format!("{}/{}", kind, id));
    Json(json!({"message": "Deleted"})).into_response()
}

pub fn router(data: Shared) -> Router {
    Router::new()
        .route("/api/auth/{role}/login", post(login))
        .route("/api/auth/{role}/signup", post(signup))
        .route("/api/restaurants", get(list_restaurants).post(create_restaurant))
        .route("/api/restaurants/{id}", get(get_restaurant).put(update_restaurant))
        .route("/api/restaurants/{id}/menu", get(menu))
        .route(
            "/api/restaurants/{id}/categories",
            get(list_categories).post(create_category),
        )
        .route("/api/restaurants/{id}/items", post(create_item))
        .route("/api/restaurants/{id}/availability", get(availability))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", put(update_order_status))
        .route("/api/reservations", get(list_reservations).post(create_reservation))
        .route("/api/reservations/{id}", get(get_reservation))
        .route("/api/reservations/{id}/status", put(update_reservation_status))
        .route("/api/restaurant/orders", get(restaurant_orders))
        .route("/api/restaurant/reservations", get(restaurant_reservations))
        .route("/api/favorites", get(list_favorites))
        .route(
            "/api/favorites/{id}",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/api/payments/checkout", post(checkout))
        .route("/api/payments/status/{session_id}", get(payment_status))
        .route("/api/admin/dashboard/stats", get(admin_stats))
        .route("/api/admin/restaurants", get(admin_restaurants))
        .route("/api/admin/orders", get(admin_orders))
        .route("/api/admin/reservations", get(admin_reservations))
        .route("/api/admin/users", get(admin_users))
        .route("/api/admin/{kind}/{id}/status", put(admin_set_status))
        .route("/api/admin/{kind}/{id}", delete(admin_delete))
        .with_state(data)
}

// ========== App harness ==========

pub struct TestApp {
    pub state: Arc<AppState<OneshotHttpClient>>,
    pub data: Shared,
    pub dir: tempfile::TempDir,
}

pub fn test_config(dir: &std::path::Path) -> AppConfig {
    AppConfig {
        backend_url: "http://mock".into(),
        origin_url: "http://localhost:3000".into(),
        data_dir: dir.to_path_buf(),
        order_poll_interval: Duration::from_millis(50),
        payment_poll_interval: Duration::from_millis(10),
        payment_max_attempts: 4,
        ..AppConfig::default()
    }
}

async fn state_for(dir: &std::path::Path, data: &Shared) -> Arc<AppState<OneshotHttpClient>> {
    let api = DineDashClient::new(OneshotHttpClient::new(router(data.clone())));
    Arc::new(AppState::with_client(test_config(dir), api).await.unwrap())
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_data(MockData::default()).await
    }

    pub async fn with_data(data: MockData) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data = Arc::new(Mutex::new(data));
        let state = state_for(dir.path(), &data).await;
        Self { state, data, dir }
    }

    /// Fresh state over the same storage directory, as after a restart
    pub async fn restart(&self) -> Arc<AppState<OneshotHttpClient>> {
        state_for(self.dir.path(), &self.data).await
    }

    pub async fn login_as(&self, role: UserRole) {
        let (token, user_id, name) = match role {
            UserRole::Restaurant => (OWNER_TOKEN, "owner-1", "Ravi"),
            UserRole::Admin => (ADMIN_TOKEN, "admin-1", "Admin"),
            _ => (CUSTOMER_TOKEN, "cust-1", "Asha"),
        };
        let resp = dinedash_client::TokenResponse {
            token: token.into(),
            user_id: user_id.into(),
            email: format!("{}@example.com", user_id),
            name: name.into(),
            role,
        };
        self.state.login(resp).await.unwrap();
    }

    pub fn data(&self) -> MutexGuard<'_, MockData> {
        lock(&self.data)
    }
}

/// Messages notified since the last call
pub fn messages(rx: &mut broadcast::Receiver<Notification>) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n.message);
    }
    out
}
