//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category_id: String,
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

/// Menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: String,
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_veg: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Category with its items, as returned by `GET /restaurants/{id}/menu`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    #[serde(flatten)]
    pub category: MenuCategory,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Total number of items across all sections
pub fn menu_item_count(menu: &[MenuSection]) -> usize {
    menu.iter().map(|s| s.items.len()).sum()
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryCreate {
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_veg: bool,
    pub is_available: bool,
}
