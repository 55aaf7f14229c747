//! Return pages of the hosted checkout
//!
//! `/payment-success?session_id=…` polls the payment status until the
//! provider reports `paid` or the attempt budget runs out.
//! `/payment-cancel` is static.

use std::time::Duration;

use dinedash_client::HttpClient;
use shared::models::PaymentTransaction;
use tokio_util::sync::CancellationToken;

use crate::core::{AppConfig, AppState};

/// Grace period for the session to become available
const TOKEN_WAIT: Duration = Duration::from_secs(1);

pub const UNKNOWN_TITLE: &str = "Payment Status Unknown";
pub const UNKNOWN_MESSAGE: &str =
    "We're having trouble verifying your payment. Please check your email for confirmation.";
pub const CANCEL_TITLE: &str = "Payment Cancelled";
pub const CANCEL_MESSAGE: &str = "Your payment was cancelled. No charges were made.";

/// Why a payment could not be confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    /// No `session_id` in the return URL
    MissingSession,
    /// No login to query the status with
    NotAuthenticated,
    /// Status was readable but never `paid`
    NotConfirmed,
    /// Status requests kept failing
    Unreachable,
    /// Page closed while polling
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Success(PaymentTransaction),
    Unknown(UnknownReason),
}

/// Payment status poller for one checkout session
#[derive(Debug, Clone)]
pub struct PaymentVerifier {
    session_id: Option<String>,
    interval: Duration,
    max_attempts: u32,
}

impl PaymentVerifier {
    pub fn new(session_id: Option<String>, config: &AppConfig) -> Self {
        Self {
            session_id: session_id.filter(|s| !s.is_empty()),
            interval: config.payment_poll_interval,
            max_attempts: config.payment_max_attempts.max(1),
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Poll until paid, exhausted or cancelled
    ///
    /// Failed requests count as attempts. A confirmed payment clears the cart.
    pub async fn verify<H: HttpClient>(
        &self,
        state: &AppState<H>,
        cancel: &CancellationToken,
    ) -> PaymentOutcome {
        let Some(session_id) = self.session_id.as_deref() else {
            tracing::warn!("Payment return without session_id");
            return PaymentOutcome::Unknown(UnknownReason::MissingSession);
        };

        if state.token().await.is_none() {
            tokio::select! {
                _ = cancel.cancelled() => return PaymentOutcome::Unknown(UnknownReason::Cancelled),
                _ = tokio::time::sleep(TOKEN_WAIT) => {}
            }
            if state.token().await.is_none() {
                tracing::warn!(session_id, "No session to verify payment with");
                return PaymentOutcome::Unknown(UnknownReason::NotAuthenticated);
            }
        }

        let mut last: Option<PaymentTransaction> = None;
        for attempt in 1..=self.max_attempts {
            match state.api.payment_status(session_id).await {
                Ok(tx) if tx.is_paid() => {
                    tracing::info!(
                        session_id,
                        transaction_id = %tx.transaction_id,
                        amount = tx.amount,
                        attempt,
                        "Payment confirmed"
                    );
                    if let Err(e) = state.cart.write().await.clear() {
                        tracing::warn!(error = %e, "Payment confirmed but cart could not be cleared");
                    }
                    return PaymentOutcome::Success(tx);
                }
                Ok(tx) => {
                    tracing::debug!(session_id, attempt, status = %tx.payment_status, "Payment not confirmed yet");
                    last = Some(tx);
                }
                Err(e) => {
                    tracing::debug!(session_id, attempt, error = %e, "Payment status request failed");
                }
            }

            if attempt < self.max_attempts {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!(session_id, "Payment verification cancelled");
                        return PaymentOutcome::Unknown(UnknownReason::Cancelled);
                    }
                    _ = tokio::time::sleep(self.interval) => {}
                }
            }
        }

        match last {
            Some(tx) => {
                tracing::warn!(
                    session_id,
                    status = %tx.payment_status,
                    attempts = self.max_attempts,
                    "Payment still not confirmed after polling"
                );
                PaymentOutcome::Unknown(UnknownReason::NotConfirmed)
            }
            None => {
                tracing::warn!(session_id, attempts = self.max_attempts, "Payment status unreachable");
                PaymentOutcome::Unknown(UnknownReason::Unreachable)
            }
        }
    }
}
