//! Order tracking and reservation details
//!
//! The order page refreshes on `order_poll_interval` until closed; the
//! reservation page is fetched once.

use std::sync::Arc;

use dinedash_client::HttpClient;
use shared::models::{Order, Reservation};
use tokio::sync::watch;

use super::reported;
use crate::core::status::{self, Tone, TimelineStep};
use crate::core::{AppResult, AppState, PollHandle, Poller};

/// Display model of an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub order: Order,
    pub status_label: String,
    pub tone: Tone,
    pub timeline: Vec<TimelineStep>,
    /// Estimated delivery time while the order is not delivered yet
    pub delivery_estimate: Option<String>,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let delivery_estimate = order
            .estimated_delivery_time
            .clone()
            .filter(|_| status::shows_delivery_estimate(&order.status));
        Self {
            status_label: status::order_status_label(&order.status),
            tone: status::order_tone(&order.status),
            timeline: status::order_timeline(&order.status),
            delivery_estimate,
            order,
        }
    }
}

/// Fetch an order once
pub async fn load_order<H: HttpClient>(state: &AppState<H>, order_id: &str) -> AppResult<OrderView> {
    state.require_auth().await?;
    let order = state
        .api
        .get_order(order_id)
        .await
        .map_err(|e| reported(state, e, "Failed to load order"))?;
    Ok(order.into())
}

/// Live view of one order, refreshed in the background
pub struct OrderTracking {
    order_id: String,
    rx: watch::Receiver<Option<OrderView>>,
    handle: PollHandle,
}

impl OrderTracking {
    /// Start polling `order_id`
    ///
    /// Refresh failures are logged and the last known order stays visible.
    pub async fn open<H>(state: Arc<AppState<H>>, order_id: impl Into<String>) -> AppResult<Self>
    where
        H: HttpClient + 'static,
    {
        state.require_auth().await?;

        let order_id = order_id.into();
        let (tx, rx) = watch::channel(None);
        let poller = Poller::new("order-tracking", state.config.order_poll_interval);

        let id = order_id.clone();
        let handle = poller.spawn(move || {
            let state = state.clone();
            let tx = tx.clone();
            let id = id.clone();
            async move {
                match state.api.get_order(&id).await {
                    Ok(order) => {
                        tracing::debug!(order_id = %id, status = %order.status, "Order refreshed");
                        tx.send_replace(Some(order.into()));
                    }
                    Err(e) => tracing::warn!(order_id = %id, error = %e, "Failed to refresh order"),
                }
            }
        });

        Ok(Self { order_id, rx, handle })
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Latest fetched order, `None` until the first successful fetch
    pub fn current(&self) -> Option<OrderView> {
        self.rx.borrow().clone()
    }

    /// Wait for the next refresh
    ///
    /// Returns `None` once polling has stopped.
    pub async fn changed(&mut self) -> Option<OrderView> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone()
    }

    /// Close the page
    pub async fn close(self) {
        self.handle.stop().await;
    }
}

/// Display model of a reservation
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationView {
    pub reservation: Reservation,
    pub status_label: String,
    pub tone: Tone,
    pub payment_tone: Tone,
}

impl From<Reservation> for ReservationView {
    fn from(reservation: Reservation) -> Self {
        Self {
            status_label: status::reservation_status_label(&reservation.status),
            tone: status::reservation_tone(&reservation.status),
            payment_tone: status::payment_tone(&reservation.payment_status),
            reservation,
        }
    }
}

pub async fn load_reservation<H: HttpClient>(
    state: &AppState<H>,
    reservation_id: &str,
) -> AppResult<ReservationView> {
    state.require_auth().await?;
    let reservation = state
        .api
        .get_reservation(reservation_id)
        .await
        .map_err(|e| reported(state, e, "Failed to load reservation"))?;
    Ok(reservation.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderStatus;

    fn order(status: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "order_id": "o1", "user_id": "u1", "restaurant_id": "r1",
            "total_amount": 200.0, "payment_method": "COD",
            "status": status,
            "estimated_delivery_time": "2026-10-16T19:30:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_estimate_hidden_once_delivered() {
        let view = OrderView::from(order("PREPARING"));
        assert_eq!(view.delivery_estimate.as_deref(), Some("2026-10-16T19:30:00Z"));
        assert_eq!(view.status_label, "Order Preparation");
        assert_eq!(view.timeline.iter().filter(|s| s.active).count(), 3);

        let view = OrderView::from(order("DELIVERED"));
        assert_eq!(view.delivery_estimate, None);
        assert!(view.timeline.iter().all(|s| s.active));
    }

    #[test]
    fn test_unknown_status_renders() {
        let view = OrderView::from(order("REFUNDED"));
        assert_eq!(view.order.status, OrderStatus::Other("REFUNDED".into()));
        assert_eq!(view.tone, Tone::Neutral);
        assert!(view.timeline.iter().all(|s| !s.active));
        assert!(view.delivery_estimate.is_some());
    }
}
