//! Payment endpoints

use shared::models::{CheckoutRequest, CheckoutSession, PaymentTransaction};

use crate::client::common::api_path;
use crate::{ClientResult, DineDashClient, HttpClient};

impl<H: HttpClient> DineDashClient<H> {
    /// `POST /payments/checkout` - create a hosted checkout session
    pub async fn create_checkout(&self, req: &CheckoutRequest) -> ClientResult<CheckoutSession> {
        self.http.post(&api_path("/payments/checkout"), req).await
    }

    /// `GET /payments/status/{session_id}`
    pub async fn payment_status(&self, session_id: &str) -> ClientResult<PaymentTransaction> {
        self.http
            .get(&api_path(&format!("/payments/status/{}", session_id)))
            .await
    }
}
