//! Core module for DineDash
//!
//! - AppState: session + cart + notifier + API client
//! - SessionStore / CartStore: persisted client state
//! - Router: route parsing and role gates
//! - Poller: interval refresh tasks
//! - AppError: error type with numeric codes

pub mod cart;
pub mod config;
pub mod confirm;
pub mod error;
pub mod logger;
pub mod notify;
pub mod poller;
pub mod router;
pub mod session;
pub mod state;
pub mod status;
pub mod storage;

pub use cart::{AddOutcome, CartItem, CartStore};
pub use config::AppConfig;
pub use confirm::{AutoConfirm, Confirm};
pub use error::{AppError, AppResult};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use poller::{PollHandle, Poller};
pub use router::{DashboardTab, Resolution, Route};
pub use session::SessionStore;
pub use state::AppState;
pub use storage::{LocalStorage, StorageError};
