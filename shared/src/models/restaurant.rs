//! Restaurant Model

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Which services a restaurant offers
    pub enum ServiceType {
        Delivery => "delivery",
        Reservations => "reservations",
        Both => "both",
    }
}

impl ServiceType {
    /// Delivery menu and cart are shown
    ///
    /// Unknown values are treated like `both`.
    pub fn offers_delivery(&self) -> bool {
        !matches!(self, Self::Reservations)
    }

    /// Table booking panel is shown
    pub fn offers_reservations(&self) -> bool {
        !matches!(self, Self::Delivery)
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        Self::Both
    }
}

wire_enum! {
    /// Platform status of a restaurant (admin-managed)
    pub enum RestaurantStatus {
        Approved => "approved",
        Suspended => "suspended",
    }
}

impl Default for RestaurantStatus {
    fn default() -> Self {
        Self::Approved
    }
}

fn default_seat_capacity() -> i32 {
    20
}

fn default_slot_length() -> i32 {
    60
}

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub restaurant_id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub service_type: ServiceType,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub is_non_veg: bool,
    #[serde(default = "default_seat_capacity")]
    pub seat_capacity: i32,
    #[serde(default = "default_slot_length")]
    pub slot_length_minutes: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Absent on restaurants created before moderation existed
    #[serde(default)]
    pub status: RestaurantStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update restaurant payload (`POST /restaurants`, `PUT /restaurants/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub service_type: ServiceType,
    pub is_veg: bool,
    pub is_non_veg: bool,
    pub seat_capacity: i32,
    pub slot_length_minutes: i32,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Default for RestaurantCreate {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            cuisine: String::new(),
            address: String::new(),
            phone: String::new(),
            hours: String::new(),
            service_type: ServiceType::Both,
            is_veg: false,
            is_non_veg: false,
            seat_capacity: default_seat_capacity(),
            slot_length_minutes: default_slot_length(),
            image_url: String::new(),
            logo_url: None,
        }
    }
}

/// Diet filter for restaurant and menu listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietFilter {
    Veg,
    NonVeg,
}

impl DietFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non_veg",
        }
    }

    /// Parse a filter value; `all` and unknown values mean no filter
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "veg" => Some(Self::Veg),
            "non_veg" | "non-veg" => Some(Self::NonVeg),
            _ => None,
        }
    }
}

/// Query for `GET /restaurants`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantQuery {
    pub search: Option<String>,
    pub diet: Option<DietFilter>,
    pub service_type: Option<ServiceType>,
    pub cuisine: Option<String>,
}

impl RestaurantQuery {
    /// Query-string pairs; empty values are omitted
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(("search", search.trim().to_string()));
        }
        if let Some(diet) = self.diet {
            params.push(("diet", diet.as_str().to_string()));
        }
        if let Some(service_type) = &self.service_type {
            params.push(("service_type", service_type.as_str().to_string()));
        }
        if let Some(cuisine) = self.cuisine.as_deref().filter(|s| !s.is_empty()) {
            params.push(("cuisine", cuisine.to_string()));
        }
        params
    }
}
