//! Auth endpoints

use shared::client::{LoginRequest, SignupRequest, TokenResponse};
use shared::models::UserRole;

use crate::client::common::api_path;
use crate::{ClientError, ClientResult, DineDashClient, HttpClient};

fn role_segment(role: &UserRole) -> ClientResult<&'static str> {
    match role {
        UserRole::Customer => Ok("customer"),
        UserRole::Restaurant => Ok("restaurant"),
        UserRole::Admin => Ok("admin"),
        UserRole::Other(other) => Err(ClientError::InvalidRequest(format!(
            "No auth endpoint for role {}",
            other
        ))),
    }
}

impl<H: HttpClient> DineDashClient<H> {
    /// `POST /auth/{role}/login`
    ///
    /// Does not install the returned token; the caller decides when the
    /// session starts.
    pub async fn login(&self, role: &UserRole, email: &str, password: &str) -> ClientResult<TokenResponse> {
        let path = api_path(&format!("/auth/{}/login", role_segment(role)?));
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post(&path, &req).await
    }

    /// `POST /auth/{customer|restaurant}/signup`
    pub async fn signup(&self, role: &UserRole, req: &SignupRequest) -> ClientResult<TokenResponse> {
        if matches!(role, UserRole::Admin) {
            return Err(ClientError::InvalidRequest(
                "Admin accounts cannot sign up".to_string(),
            ));
        }
        let path = api_path(&format!("/auth/{}/signup", role_segment(role)?));
        self.http.post(&path, req).await
    }
}
