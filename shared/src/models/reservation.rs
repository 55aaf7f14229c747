//! Reservation Model

use serde::{Deserialize, Serialize};

use super::payment::PaymentStatus;

wire_enum! {
    /// Table reservation lifecycle
    ///
    /// PENDING_PAYMENT → CONFIRMED → SEATED → COMPLETED, with CANCELLED and
    /// NO_SHOW as alternate terminal states.
    pub enum ReservationStatus {
        PendingPayment => "PENDING_PAYMENT",
        Confirmed => "CONFIRMED",
        Seated => "SEATED",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
        NoShow => "NO_SHOW",
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::PendingPayment
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub user_id: String,
    pub restaurant_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub party_size: u32,
    /// Booking deposit, computed by the backend
    pub amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create reservation payload (`POST /reservations`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
}

/// Seat availability for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    pub available_seats: i32,
}
