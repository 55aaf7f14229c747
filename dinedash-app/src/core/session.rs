//! SessionStore - bearer token and cached user profile
//!
//! Persisted under the `token` and `user` storage keys so a restart
//! restores the login. The token is never refreshed or checked for expiry;
//! it is trusted until the backend rejects it.

use shared::models::{UserProfile, UserRole};

use super::storage::{LocalStorage, StorageError, keys};

#[derive(Debug)]
pub struct SessionStore {
    storage: LocalStorage,
    token: Option<String>,
    user: Option<UserProfile>,
}

impl SessionStore {
    /// Rehydrate from storage
    ///
    /// A token without a profile (or the reverse) is treated as logged out,
    /// as is an unreadable entry.
    pub fn load(storage: LocalStorage) -> Self {
        let token = read_or_none::<String>(&storage, keys::TOKEN);
        let user = read_or_none::<UserProfile>(&storage, keys::USER);

        let (token, user) = match (token, user) {
            (Some(token), Some(user)) => {
                tracing::info!(user_id = %user.user_id, role = %user.role, "Restored session");
                (Some(token), Some(user))
            }
            _ => (None, None),
        };

        Self {
            storage,
            token,
            user,
        }
    }

    /// Store and persist a new session
    pub fn login(&mut self, token: String, user: UserProfile) -> Result<(), StorageError> {
        self.storage.set(keys::TOKEN, &token)?;
        self.storage.set(keys::USER, &user)?;
        tracing::info!(user_id = %user.user_id, role = %user.role, "Session stored");
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.token = None;
        self.user = None;
        self.storage.remove(keys::TOKEN)?;
        self.storage.remove(keys::USER)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref().map(|u| &u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_role(&self, role: &UserRole) -> bool {
        self.is_authenticated() && self.role() == Some(role)
    }

    pub fn is_customer(&self) -> bool {
        self.has_role(&UserRole::Customer)
    }

    pub fn is_restaurant(&self) -> bool {
        self.has_role(&UserRole::Restaurant)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&UserRole::Admin)
    }
}

fn read_or_none<T: serde::de::DeserializeOwned>(storage: &LocalStorage, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Ignoring unreadable session entry");
            None
        }
    }
}
