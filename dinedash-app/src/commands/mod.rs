//! Command handlers for the `dinedash` binary
//!
//! Each handler drives a page view-model and prints its result. Failures
//! have already been pushed to the notifier by the page.

pub mod account;
pub mod admin;
pub mod browse;
pub mod dashboard;
pub mod open;
pub mod orders;
pub mod output;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use dinedash_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::UserRole;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

use crate::cli::Commands;
use crate::cli::args::{CartAction, FavoritesAction};
use crate::core::{
    AppError, AppResult, AppState, Confirm, Notification, NotificationLevel, Notifier,
};
use crate::pages::Navigation;

/// Run one CLI command
pub async fn dispatch<H>(
    command: Commands,
    state: Arc<AppState<H>>,
    confirm: &dyn Confirm,
    printer: &mut NotificationPrinter,
) -> AppResult<()>
where
    H: HttpClient + 'static,
{
    let state_ref = state.as_ref();
    match command {
        Commands::Login(args) => account::login(state_ref, args).await,
        Commands::Signup(args) => account::signup(state_ref, args).await,
        Commands::Logout => account::logout(state_ref).await,
        Commands::Whoami => account::whoami(state_ref).await,

        Commands::Restaurants(args) => browse::restaurants(state_ref, args).await,
        Commands::Restaurant {
            restaurant_id,
            diet,
        } => browse::restaurant(state_ref, &restaurant_id, diet.map(Into::into)).await,
        Commands::Availability(slot) => browse::availability(state_ref, slot).await,
        Commands::Reserve { slot, party_size } => browse::reserve(state_ref, slot, party_size).await,
        Commands::Favorites { action } => match action {
            FavoritesAction::List => browse::favorites(state_ref).await,
            FavoritesAction::Add { restaurant_id } => {
                browse::add_favorite(state_ref, &restaurant_id).await
            }
            FavoritesAction::Remove { restaurant_id } => {
                browse::remove_favorite(state_ref, &restaurant_id).await
            }
        },

        Commands::Cart { action } => match action {
            CartAction::Show => orders::cart(state_ref).await,
            CartAction::Add {
                restaurant_id,
                item_id,
            } => orders::add_to_cart(state_ref, &restaurant_id, &item_id, confirm).await,
            CartAction::Set { item_id, quantity } => {
                orders::set_quantity(state_ref, &item_id, quantity).await
            }
            CartAction::Remove { item_id } => orders::remove_from_cart(state_ref, &item_id).await,
            CartAction::Clear => orders::clear_cart(state_ref).await,
        },
        Commands::Checkout(args) => orders::checkout(state_ref, args).await,
        Commands::PaymentStatus { session_id } => orders::payment_status(state_ref, session_id).await,
        Commands::Order { order_id, watch } => {
            if watch {
                orders::watch_order(state.clone(), &order_id, printer).await
            } else {
                orders::order(state_ref, &order_id).await
            }
        }
        Commands::Reservation { reservation_id } => {
            orders::reservation(state_ref, &reservation_id).await
        }
        Commands::Profile { watch } => {
            if watch {
                orders::watch_profile(state.clone(), printer).await
            } else {
                orders::profile(state_ref).await
            }
        }

        Commands::Dashboard { action } => dashboard::run(state_ref, action).await,
        Commands::Admin { action } => admin::run(state_ref, action, confirm).await,
        Commands::Open { path } => open::run(state_ref, &path).await,
    }
}

/// Validation failure raised by a command handler, notified like page errors
pub(crate) fn invalid<H: HttpClient>(state: &AppState<H>, message: impl Into<String>) -> AppError {
    crate::pages::reported(
        state,
        AppError::validation_msg(ErrorCode::InvalidRequest, message),
        "",
    )
}

/// Print where the user is sent next
pub(crate) fn print_navigation(nav: &Navigation) {
    match nav {
        Navigation::Stay => {}
        Navigation::To(route) => println!("→ {}", route),
        Navigation::External(url) => {
            println!("Complete the payment at:");
            println!("  {}", url);
        }
    }
}

/// Hint shown when a command needs a login
pub fn login_hint(err: &AppError, current_role: Option<&UserRole>) -> Option<String> {
    let role = match err {
        AppError::LoginRequired(role) => role.clone(),
        _ => current_role.cloned().unwrap_or(UserRole::Customer),
    };
    match Navigation::for_error(err, &role)? {
        Navigation::To(route) => Some(format!(
            "Login required ({}): run `dinedash login --role {}`",
            route, role
        )),
        _ => None,
    }
}

/// Cancelled on Ctrl-C
pub(crate) fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupted");
            child.cancel();
        }
    });
    token
}

/// Prints notifications to stderr
pub struct NotificationPrinter {
    rx: broadcast::Receiver<Notification>,
}

impl NotificationPrinter {
    pub fn new(notifier: &Notifier) -> Self {
        Self {
            rx: notifier.subscribe(),
        }
    }

    /// Print everything received so far
    pub fn flush(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(n) => eprintln!("{}", format_notification(&n)),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notifications dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }
}

pub fn format_notification(n: &Notification) -> String {
    let mark = match n.level {
        NotificationLevel::Success => "✓",
        NotificationLevel::Info => "•",
        NotificationLevel::Error => "✗",
    };
    format!("{} {}", mark, n.message)
}

/// Confirmation read from stdin, anything but y/yes declines
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        if io::stderr().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}
