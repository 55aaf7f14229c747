//! Order Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::payment::{PaymentMethod, PaymentStatus};

wire_enum! {
    /// Delivery order lifecycle
    ///
    /// PLACED → ACCEPTED → PREPARING → OUT_FOR_DELIVERY → DELIVERED,
    /// CANCELLED reachable from the early states.
    pub enum OrderStatus {
        Placed => "PLACED",
        Accepted => "ACCEPTED",
        Preparing => "PREPARING",
        OutForDelivery => "OUT_FOR_DELIVERY",
        Delivered => "DELIVERED",
        Cancelled => "CANCELLED",
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Placed
    }
}

impl OrderStatus {
    /// No further transitions expected
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Order line as stored on the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub restaurant_id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_phone: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub estimated_delivery_time: Option<String>,
    /// Status → ISO timestamp of when it was reached
    #[serde(default)]
    pub status_timestamps: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Timestamp recorded for a given status, if the backend sent one
    pub fn reached_at(&self, status: &OrderStatus) -> Option<&str> {
        self.status_timestamps
            .as_ref()
            .and_then(|m| m.get(status.as_str()))
            .map(String::as_str)
    }
}

/// Create order payload (`POST /orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub delivery_address: String,
    pub delivery_phone: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserialize_minimal() {
        let json = r#"{
            "order_id": "o1", "user_id": "u1", "restaurant_id": "r1",
            "items": [{"item_id": "i1", "name": "Dosa", "price": 90.0, "quantity": 2}],
            "total_amount": 180.0, "payment_method": "COD"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::Cod);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: OrderStatus = serde_json::from_str("\"REFUNDED\"").unwrap();
        assert_eq!(status, OrderStatus::Other("REFUNDED".into()));
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_reached_at() {
        let json = r#"{
            "order_id": "o1", "user_id": "u1", "restaurant_id": "r1", "total_amount": 0,
            "payment_method": "Stripe",
            "status_timestamps": {"PLACED": "2025-01-01T10:00:00Z"}
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(
            order.reached_at(&OrderStatus::Placed),
            Some("2025-01-01T10:00:00Z")
        );
        assert_eq!(order.reached_at(&OrderStatus::Accepted), None);
    }
}
