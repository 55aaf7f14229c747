use std::sync::Arc;

use clap::Parser;
use dinedash_app::cli::Cli;
use dinedash_app::commands::{self, NotificationPrinter, StdinConfirm};
use dinedash_app::core::logger::init_logging;
use dinedash_app::core::{AutoConfirm, Confirm};
use dinedash_app::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, flags, logging)
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(cli.backend_url.clone(), cli.data_dir.clone());
    let _log_guard = init_logging(&config.log_dir(), cli.verbose)?;

    tracing::debug!(backend = %config.backend_url, "DineDash starting");

    // 2. Session, cart and API client
    let state = Arc::new(AppState::connect(config).await?);

    // 3. Run the command
    let confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    };
    let mut printer = NotificationPrinter::new(&state.notifier);
    let result = commands::dispatch(cli.command, state.clone(), confirm.as_ref(), &mut printer).await;
    printer.flush();

    if let Err(e) = result {
        let role = state.current_user().await.map(|u| u.role);
        if let Some(hint) = commands::login_hint(&e, role.as_ref()) {
            eprintln!("{}", hint);
        }
        tracing::debug!(error = %e, "Command failed");
        drop(_log_guard);
        std::process::exit(1);
    }
    Ok(())
}
