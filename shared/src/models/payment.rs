//! Payment Model

use serde::{Deserialize, Serialize};

wire_enum! {
    /// How an order is paid
    pub enum PaymentMethod {
        Cod => "COD",
        Stripe => "Stripe",
    }
}

wire_enum! {
    /// Payment status of an order, reservation or transaction
    pub enum PaymentStatus {
        Pending => "pending",
        Paid => "paid",
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

wire_enum! {
    /// What a checkout session pays for
    pub enum PaymentType {
        Order => "order",
        Reservation => "reservation",
    }
}

/// `POST /payments/checkout` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub payment_type: PaymentType,
    pub reference_id: String,
    /// Origin the hosted page redirects back to
    pub origin_url: String,
}

/// Hosted checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
    pub session_id: String,
}

/// Payment transaction (`GET /payments/status/{session_id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    #[serde(default)]
    pub transaction_id: String,
    pub session_id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    pub payment_type: PaymentType,
    pub reference_id: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}

impl PaymentTransaction {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}
