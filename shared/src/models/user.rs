//! User Model

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Account role, decides which areas of the app are reachable
    pub enum UserRole {
        Customer => "customer",
        Restaurant => "restaurant",
        Admin => "admin",
    }
}

wire_enum! {
    /// Account status (admin-managed)
    pub enum UserStatus {
        Active => "active",
        Suspended => "suspended",
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Profile cached after login until logout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// User entity as listed by the admin API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(UserRole::Customer.as_str(), "customer");
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(
            UserRole::from("waiter"),
            UserRole::Other("waiter".to_string())
        );
        assert_eq!(UserRole::all().len(), 3);
    }

    #[test]
    fn test_unknown_role_roundtrips_verbatim() {
        let role: UserRole = serde_json::from_str("\"courier\"").unwrap();
        assert!(!role.is_known());
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"courier\"");
    }

    #[test]
    fn test_user_status_defaults_to_active() {
        let json = r#"{"user_id":"u1","email":"a@b.c","name":"A","role":"customer"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.phone, None);
    }
}
