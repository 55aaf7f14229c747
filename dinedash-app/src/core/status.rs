//! Status display mapping
//!
//! Order timeline steps, badge tones, labels and the status choices
//! offered to each role. Unknown statuses from the backend always map to
//! something displayable.

use shared::models::{
    OrderStatus, PaymentStatus, ReservationStatus, RestaurantStatus, UserRole, UserStatus,
};

/// Symbolic badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Indigo,
    Orange,
    Purple,
    Green,
    Red,
    Yellow,
    /// Fallback for anything unknown
    Neutral,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Neutral => "gray",
        }
    }
}

// =============================================================================
// Order timeline
// =============================================================================

/// One step of the order tracking timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub active: bool,
}

const TIMELINE: [(OrderStatus, &str); 5] = [
    (OrderStatus::Placed, "Order Placed"),
    (OrderStatus::Accepted, "Order Accepted"),
    (OrderStatus::Preparing, "Order Preparation"),
    (OrderStatus::OutForDelivery, "On the way"),
    (OrderStatus::Delivered, "Delivered"),
];

/// Position of `status` on the timeline; cancelled and unknown have none
pub fn order_step_index(status: &OrderStatus) -> Option<usize> {
    TIMELINE.iter().position(|(s, _)| s == status)
}

/// Timeline with every step up to the current one marked active
pub fn order_timeline(status: &OrderStatus) -> Vec<TimelineStep> {
    let current = order_step_index(status);
    TIMELINE
        .iter()
        .enumerate()
        .map(|(idx, (step, label))| TimelineStep {
            status: step.clone(),
            label,
            active: current.is_some_and(|c| idx <= c),
        })
        .collect()
}

pub fn order_status_label(status: &OrderStatus) -> String {
    match order_step_index(status) {
        Some(idx) => TIMELINE[idx].1.to_string(),
        None => match status {
            OrderStatus::Cancelled => "Cancelled".to_string(),
            other => humanize(other.as_str()),
        },
    }
}

pub fn order_tone(status: &OrderStatus) -> Tone {
    match status {
        OrderStatus::Placed => Tone::Blue,
        OrderStatus::Accepted => Tone::Indigo,
        OrderStatus::Preparing => Tone::Orange,
        OrderStatus::OutForDelivery => Tone::Purple,
        OrderStatus::Delivered => Tone::Green,
        OrderStatus::Cancelled => Tone::Red,
        OrderStatus::Other(_) => Tone::Neutral,
    }
}

/// Estimated delivery time is only shown before delivery
pub fn shows_delivery_estimate(status: &OrderStatus) -> bool {
    *status != OrderStatus::Delivered
}

// =============================================================================
// Reservations, restaurants, users, payments
// =============================================================================

/// Wire value with underscores replaced, e.g. `PENDING PAYMENT`
pub fn reservation_status_label(status: &ReservationStatus) -> String {
    status.as_str().replace('_', " ")
}

pub fn reservation_tone(status: &ReservationStatus) -> Tone {
    match status {
        ReservationStatus::PendingPayment => Tone::Yellow,
        ReservationStatus::Confirmed | ReservationStatus::Completed => Tone::Green,
        ReservationStatus::Seated => Tone::Blue,
        ReservationStatus::Cancelled => Tone::Red,
        ReservationStatus::NoShow | ReservationStatus::Other(_) => Tone::Neutral,
    }
}

pub fn restaurant_tone(status: &RestaurantStatus) -> Tone {
    match status {
        RestaurantStatus::Approved => Tone::Green,
        RestaurantStatus::Suspended => Tone::Red,
        RestaurantStatus::Other(s) if s == "rejected" => Tone::Red,
        RestaurantStatus::Other(s) if s == "pending" => Tone::Yellow,
        RestaurantStatus::Other(_) => Tone::Neutral,
    }
}

pub fn user_tone(status: &UserStatus) -> Tone {
    match status {
        UserStatus::Active => Tone::Green,
        UserStatus::Suspended => Tone::Red,
        UserStatus::Other(_) => Tone::Neutral,
    }
}

pub fn payment_tone(status: &PaymentStatus) -> Tone {
    match status {
        PaymentStatus::Paid => Tone::Green,
        PaymentStatus::Pending => Tone::Yellow,
        PaymentStatus::Other(_) => Tone::Neutral,
    }
}

/// Title-case an upper snake wire value: `OUT_FOR_DELIVERY` -> `Out For Delivery`
fn humanize(raw: &str) -> String {
    raw.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Role transitions
// =============================================================================

/// Selectable option in a status picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOption<S> {
    pub status: S,
    pub label: &'static str,
}

fn can_manage(role: &UserRole) -> bool {
    matches!(role, UserRole::Restaurant | UserRole::Admin)
}

/// Order statuses a role may pick; customers get none
///
/// No transition legality is checked here; the backend decides.
pub fn order_status_options(role: &UserRole) -> Vec<StatusOption<OrderStatus>> {
    if !can_manage(role) {
        return Vec::new();
    }
    vec![
        StatusOption { status: OrderStatus::Placed, label: "Placed" },
        StatusOption { status: OrderStatus::Accepted, label: "Accepted" },
        StatusOption { status: OrderStatus::Preparing, label: "Preparing" },
        StatusOption { status: OrderStatus::OutForDelivery, label: "Out for Delivery" },
        StatusOption { status: OrderStatus::Delivered, label: "Delivered" },
        StatusOption { status: OrderStatus::Cancelled, label: "Cancelled" },
    ]
}

pub fn reservation_status_options(role: &UserRole) -> Vec<StatusOption<ReservationStatus>> {
    if !can_manage(role) {
        return Vec::new();
    }
    vec![
        StatusOption { status: ReservationStatus::PendingPayment, label: "Pending Payment" },
        StatusOption { status: ReservationStatus::Confirmed, label: "Confirmed" },
        StatusOption { status: ReservationStatus::Seated, label: "Seated" },
        StatusOption { status: ReservationStatus::Completed, label: "Completed" },
        StatusOption { status: ReservationStatus::Cancelled, label: "Cancelled" },
        StatusOption { status: ReservationStatus::NoShow, label: "No Show" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_order_status_maps() {
        for status in OrderStatus::all() {
            assert!(!order_status_label(&status).is_empty());
            assert_ne!(order_tone(&status), Tone::Neutral, "{}", status);
        }
        assert_eq!(order_step_index(&OrderStatus::Placed), Some(0));
        assert_eq!(order_step_index(&OrderStatus::Delivered), Some(4));
        assert_eq!(order_status_label(&OrderStatus::OutForDelivery), "On the way");
        assert_eq!(order_status_label(&OrderStatus::Cancelled), "Cancelled");
    }

    #[test]
    fn test_timeline_active_steps() {
        let steps = order_timeline(&OrderStatus::Preparing);
        let active: Vec<bool> = steps.iter().map(|s| s.active).collect();
        assert_eq!(active, vec![true, true, true, false, false]);
        assert_eq!(steps[2].label, "Order Preparation");

        assert!(order_timeline(&OrderStatus::Delivered).iter().all(|s| s.active));
    }

    #[test]
    fn test_cancelled_and_unknown_have_no_active_step() {
        for status in [
            OrderStatus::Cancelled,
            OrderStatus::from("REFUNDED"),
            OrderStatus::from(""),
        ] {
            assert_eq!(order_step_index(&status), None);
            assert!(order_timeline(&status).iter().all(|s| !s.active));
        }
        let unknown = OrderStatus::from("READY_FOR_PICKUP");
        assert_eq!(order_tone(&unknown), Tone::Neutral);
        assert_eq!(order_status_label(&unknown), "Ready For Pickup");
    }

    #[test]
    fn test_delivery_estimate_visibility() {
        assert!(shows_delivery_estimate(&OrderStatus::OutForDelivery));
        assert!(!shows_delivery_estimate(&OrderStatus::Delivered));
    }

    #[test]
    fn test_reservation_labels_and_tones() {
        assert_eq!(
            reservation_status_label(&ReservationStatus::PendingPayment),
            "PENDING PAYMENT"
        );
        assert_eq!(reservation_status_label(&ReservationStatus::NoShow), "NO SHOW");
        assert_eq!(reservation_tone(&ReservationStatus::Confirmed), Tone::Green);
        assert_eq!(reservation_tone(&ReservationStatus::from("WAITLIST")), Tone::Neutral);
    }

    #[test]
    fn test_other_tones_fall_back() {
        assert_eq!(restaurant_tone(&RestaurantStatus::Suspended), Tone::Red);
        assert_eq!(restaurant_tone(&RestaurantStatus::from("pending")), Tone::Yellow);
        assert_eq!(restaurant_tone(&RestaurantStatus::from("archived")), Tone::Neutral);
        assert_eq!(user_tone(&UserStatus::Active), Tone::Green);
        assert_eq!(payment_tone(&PaymentStatus::Paid), Tone::Green);
        assert_eq!(payment_tone(&PaymentStatus::from("refunded")), Tone::Neutral);
        assert_eq!(Tone::Neutral.name(), "gray");
    }

    #[test]
    fn test_status_options_by_role() {
        assert!(order_status_options(&UserRole::Customer).is_empty());
        assert!(reservation_status_options(&UserRole::Customer).is_empty());

        let options = order_status_options(&UserRole::Restaurant);
        assert_eq!(options.len(), 6);
        assert_eq!(options[3].label, "Out for Delivery");
        assert_eq!(reservation_status_options(&UserRole::Admin).len(), 6);
    }
}
