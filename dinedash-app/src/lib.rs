//! DineDash - food delivery and table reservation client
//!
//! - `core`: session, cart, storage, notifications, routing, polling
//! - `pages`: view-models for every screen of the app
//! - `cli` / `commands`: the `dinedash` terminal front end

pub use dinedash_client;
pub use shared;

pub mod cli;
pub mod commands;
pub mod core;
pub mod pages;

pub use crate::core::{AppConfig, AppError, AppResult, AppState};
pub use pages::Navigation;
