//! Customer profile: own orders and reservations

use std::sync::Arc;

use dinedash_client::HttpClient;
use futures::future::try_join;
use shared::models::{Order, Reservation, UserProfile, UserRole};
use tokio::sync::watch;

use crate::core::{AppResult, AppState, PollHandle, Poller};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileData {
    pub orders: Vec<Order>,
    pub reservations: Vec<Reservation>,
}

/// Fetch orders and reservations together
///
/// Either request failing fails the whole load.
pub async fn load<H: HttpClient>(state: &AppState<H>) -> AppResult<ProfileData> {
    state.require_role(UserRole::Customer).await?;
    let (orders, reservations) =
        try_join(state.api.list_orders(), state.api.list_reservations()).await?;
    Ok(ProfileData {
        orders,
        reservations,
    })
}

/// Profile page kept fresh by a background poller
pub struct ProfilePage {
    user: UserProfile,
    rx: watch::Receiver<Option<ProfileData>>,
    handle: PollHandle,
}

impl ProfilePage {
    /// Open the page and start refreshing every `order_poll_interval`
    pub async fn open<H>(state: Arc<AppState<H>>) -> AppResult<Self>
    where
        H: HttpClient + 'static,
    {
        let user = state.require_role(UserRole::Customer).await?;
        let (tx, rx) = watch::channel(None);
        let poller = Poller::new("customer-profile", state.config.order_poll_interval);

        let handle = poller.spawn(move || {
            let state = state.clone();
            let tx = tx.clone();
            async move {
                match load(&state).await {
                    Ok(data) => {
                        tracing::debug!(
                            orders = data.orders.len(),
                            reservations = data.reservations.len(),
                            "Profile refreshed"
                        );
                        tx.send_replace(Some(data));
                    }
                    Err(e) => tracing::warn!(error = %e, "Failed to refresh profile"),
                }
            }
        });

        Ok(Self { user, rx, handle })
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    /// Latest data, `None` until the first load succeeded
    pub fn current(&self) -> Option<ProfileData> {
        self.rx.borrow().clone()
    }

    pub async fn changed(&mut self) -> Option<ProfileData> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone()
    }

    pub async fn close(self) {
        self.handle.stop().await;
    }
}
