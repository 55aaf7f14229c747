//! Client-related types shared between the API client and the app
//!
//! Auth DTOs and the generic response envelopes of the DineDash REST API.

use serde::{Deserialize, Serialize};

use crate::models::{UserProfile, UserRole};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /auth/{role}/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request (`POST /auth/{customer|restaurant}/signup`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Token returned by every login/signup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl TokenResponse {
    /// Split into the bearer token and the cached profile
    pub fn into_session(self) -> (String, UserProfile) {
        let profile = UserProfile {
            user_id: self.user_id,
            email: self.email,
            name: self.name,
            role: self.role,
        };
        (self.token, profile)
    }
}

// =============================================================================
// Generic envelopes
// =============================================================================

/// `{"message": "..."}` body returned by mutation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `{"detail": "..."}` body returned on non-2xx responses
///
/// Validation failures carry a list instead of a string, so `detail` is kept
/// as raw JSON and flattened by [`ApiErrorBody::detail_text`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    /// Human readable detail text
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                    .map(str::to_string)
                    .collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        }
    }
}

/// Status update body (`PUT .../status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_into_session() {
        let json = r#"{"token":"t1","user_id":"u1","email":"a@b.c","name":"Asha","role":"customer"}"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        let (token, profile) = resp.into_session();
        assert_eq!(token, "t1");
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.role, UserRole::Customer);
    }

    #[test]
    fn test_signup_request_skips_missing_phone() {
        let req = SignupRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            name: "Asha".into(),
            phone: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_error_body_detail_text() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("Invalid credentials"));

        let body: ApiErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.detail_text().as_deref(),
            Some("value is not a valid email address")
        );

        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":null}"#).unwrap();
        assert_eq!(body.detail_text(), None);
    }
}
