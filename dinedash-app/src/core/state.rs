//! AppState - everything a page needs
//!
//! Holds the session, the cart, the notifier and the API client. Pages
//! receive it explicitly; pollers get an `Arc<AppState<H>>`.

use dinedash_client::{ClientConfig, DineDashClient, HttpClient, NetworkHttpClient, TokenResponse};
use shared::models::{UserProfile, UserRole};
use tokio::sync::RwLock;

use super::cart::CartStore;
use super::config::AppConfig;
use super::error::{AppError, AppResult};
use super::notify::Notifier;
use super::session::SessionStore;
use super::storage::LocalStorage;

pub struct AppState<H: HttpClient> {
    pub config: AppConfig,
    pub storage: LocalStorage,
    pub session: RwLock<SessionStore>,
    pub cart: RwLock<CartStore>,
    pub notifier: Notifier,
    pub api: DineDashClient<H>,
}

impl AppState<NetworkHttpClient> {
    /// Build state with the reqwest transport from `config`
    pub async fn connect(config: AppConfig) -> AppResult<Self> {
        let client = ClientConfig::new(config.backend_url.clone())
            .with_timeout(config.request_timeout_secs)
            .build()?;
        Self::with_client(config, client).await
    }
}

impl<H: HttpClient> AppState<H> {
    /// Open storage, rehydrate session and cart, install the stored token
    pub async fn with_client(config: AppConfig, api: DineDashClient<H>) -> AppResult<Self> {
        let storage = LocalStorage::open(config.storage_dir())?;
        let session = SessionStore::load(storage.clone());
        let cart = CartStore::load(storage.clone());

        api.set_token(session.token().map(str::to_string)).await;

        tracing::debug!(
            backend = %config.backend_url,
            storage = %storage.dir().display(),
            authenticated = session.is_authenticated(),
            "App state ready"
        );

        Ok(Self {
            config,
            storage,
            session: RwLock::new(session),
            cart: RwLock::new(cart),
            notifier: Notifier::new(),
            api,
        })
    }

    /// Store a login response as the current session
    pub async fn login(&self, resp: TokenResponse) -> AppResult<UserProfile> {
        let (token, profile) = resp.into_session();
        self.session.write().await.login(token.clone(), profile.clone())?;
        self.api.set_token(Some(token)).await;
        Ok(profile)
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.session.write().await.logout()?;
        self.api.set_token(None).await;
        Ok(())
    }

    pub async fn current_user(&self) -> Option<UserProfile> {
        self.session.read().await.user().cloned()
    }

    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token().map(str::to_string)
    }

    /// Any logged-in user, else a customer login is required
    pub async fn require_auth(&self) -> AppResult<UserProfile> {
        let session = self.session.read().await;
        match (session.is_authenticated(), session.user()) {
            (true, Some(user)) => Ok(user.clone()),
            _ => Err(AppError::LoginRequired(UserRole::Customer)),
        }
    }

    /// A user with exactly `role`
    pub async fn require_role(&self, role: UserRole) -> AppResult<UserProfile> {
        let session = self.session.read().await;
        match session.user() {
            Some(user) if session.has_role(&role) => Ok(user.clone()),
            _ => Err(AppError::LoginRequired(role)),
        }
    }

    /// Push a failure to the notifier
    ///
    /// Shows the backend detail when there is one, else `fallback`.
    pub fn report(&self, err: &AppError, fallback: &str) {
        tracing::debug!(code = %err.code(), error = %err, "Operation failed");
        self.notifier.error(err.user_message(fallback));
    }

    /// Like [`Self::report`] but always shows `message`
    pub fn report_generic(&self, err: &AppError, message: &str) {
        tracing::debug!(code = %err.code(), error = %err, "Operation failed");
        self.notifier.error(message);
    }
}
