//! CartStore - single-restaurant shopping cart
//!
//! All lines belong to one restaurant. Adding an item from another
//! restaurant asks a [`Confirm`] collaborator whether to discard the
//! current cart first. Every mutation is mirrored to local storage under
//! the `cart`, `cart_restaurant_id` and `cart_restaurant_name` keys.

use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, OrderItem, Restaurant};
use shared::money;

use super::confirm::Confirm;
use super::storage::{LocalStorage, StorageError, keys};

const SWITCH_RESTAURANT_PROMPT: &str =
    "Your cart contains items from another restaurant. Clear cart and add this item?";

/// Menu item snapshot plus quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        money::to_f64(money::line_total(self.item.price, self.quantity))
    }
}

/// Result of [`CartStore::add_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// New line with quantity 1
    Added,
    /// Existing line, now at this quantity
    Incremented(u32),
    /// Cart belonged to another restaurant and the user kept it
    Declined,
}

#[derive(Debug)]
pub struct CartStore {
    storage: LocalStorage,
    items: Vec<CartItem>,
    restaurant_id: Option<String>,
    restaurant_name: Option<String>,
}

impl CartStore {
    /// Rehydrate from storage, unreadable entries start an empty cart
    pub fn load(storage: LocalStorage) -> Self {
        let items: Vec<CartItem> = storage.get(keys::CART).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable cart");
            None
        })
        .unwrap_or_default();
        let restaurant_id: Option<String> = storage.get(keys::CART_RESTAURANT_ID).ok().flatten();
        let restaurant_name: Option<String> =
            storage.get(keys::CART_RESTAURANT_NAME).ok().flatten();

        if !items.is_empty() {
            tracing::debug!(lines = items.len(), restaurant_id = ?restaurant_id, "Restored cart");
        }

        Self {
            storage,
            items,
            restaurant_id,
            restaurant_name,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn restaurant_id(&self) -> Option<&str> {
        self.restaurant_id.as_deref()
    }

    pub fn restaurant_name(&self) -> Option<&str> {
        self.restaurant_name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ price × quantity, rounded to 2 dp
    pub fn total_amount(&self) -> f64 {
        money::sum_lines(self.items.iter().map(|l| (l.item.price, l.quantity)))
    }

    /// Σ quantity, saturating at `u32::MAX`
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Quantity of one menu item in the cart (0 if absent)
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.items
            .iter()
            .find(|l| l.item.item_id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of `item` from `restaurant`
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        restaurant: &Restaurant,
        confirm: &dyn Confirm,
    ) -> Result<AddOutcome, StorageError> {
        let other_restaurant = self
            .restaurant_id
            .as_deref()
            .is_some_and(|id| id != restaurant.restaurant_id);

        if other_restaurant {
            if !confirm.confirm(SWITCH_RESTAURANT_PROMPT) {
                tracing::debug!(restaurant_id = %restaurant.restaurant_id, "Kept existing cart");
                return Ok(AddOutcome::Declined);
            }
            self.clear()?;
        }

        let outcome = match self
            .items
            .iter_mut()
            .find(|l| l.item.item_id == item.item_id)
        {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                AddOutcome::Incremented(line.quantity)
            }
            None => {
                self.items.push(CartItem {
                    item: item.clone(),
                    quantity: 1,
                });
                AddOutcome::Added
            }
        };
        self.restaurant_id = Some(restaurant.restaurant_id.clone());
        self.restaurant_name = Some(restaurant.name.clone());
        self.persist()?;

        tracing::debug!(item_id = %item.item_id, ?outcome, "Cart item added");
        Ok(outcome)
    }

    /// Remove a line; removing the last line clears the cart
    pub fn remove_item(&mut self, item_id: &str) -> Result<(), StorageError> {
        self.items.retain(|l| l.item.item_id != item_id);
        if self.items.is_empty() {
            return self.clear();
        }
        self.persist()
    }

    /// Set a line's quantity; zero or below removes the line
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) -> Result<(), StorageError> {
        if quantity <= 0 {
            return self.remove_item(item_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.items.iter_mut().find(|l| l.item.item_id == item_id) {
            line.quantity = quantity;
            self.persist()?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.restaurant_id = None;
        self.restaurant_name = None;
        self.storage.remove(keys::CART)?;
        self.storage.remove(keys::CART_RESTAURANT_ID)?;
        self.storage.remove(keys::CART_RESTAURANT_NAME)?;
        Ok(())
    }

    /// Lines as order payload items
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.items
            .iter()
            .map(|l| OrderItem {
                item_id: l.item.item_id.clone(),
                name: l.item.name.clone(),
                price: l.item.price,
                quantity: l.quantity,
                instructions: None,
            })
            .collect()
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.set(keys::CART, &self.items)?;
        match (&self.restaurant_id, &self.restaurant_name) {
            (Some(id), Some(name)) => {
                self.storage.set(keys::CART_RESTAURANT_ID, id)?;
                self.storage.set(keys::CART_RESTAURANT_NAME, name)?;
            }
            _ => {
                self.storage.remove(keys::CART_RESTAURANT_ID)?;
                self.storage.remove(keys::CART_RESTAURANT_NAME)?;
            }
        }
        Ok(())
    }
}
