//! Cart, checkout, payment and tracking commands

use std::sync::Arc;

use dinedash_client::HttpClient;
use shared::money::format_amount;

use super::{NotificationPrinter, browse, ctrl_c_token, output, print_navigation};
use crate::cli::args::CheckoutArgs;
use crate::core::{AddOutcome, AppResult, AppState, Confirm};
use crate::pages::checkout::{self, CheckoutForm};
use crate::pages::payment::{self, PaymentOutcome, PaymentVerifier};
use crate::pages::profile::{self, ProfilePage};
use crate::pages::tracking::{self, OrderTracking};

pub async fn cart<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    match checkout::summary(state).await? {
        Some(summary) => output::cart(&summary),
        None => println!("Your cart is empty"),
    }
    Ok(())
}

pub async fn add_to_cart<H: HttpClient>(
    state: &AppState<H>,
    restaurant_id: &str,
    item_id: &str,
    confirm: &dyn Confirm,
) -> AppResult<()> {
    let page = browse::open_restaurant(state, restaurant_id, None).await?;
    match page.add_to_cart(state, item_id, confirm).await? {
        AddOutcome::Declined => println!("Cart unchanged"),
        _ => cart(state).await?,
    }
    Ok(())
}

pub async fn set_quantity<H: HttpClient>(
    state: &AppState<H>,
    item_id: &str,
    quantity: i64,
) -> AppResult<()> {
    checkout::update_quantity(state, item_id, quantity).await?;
    cart(state).await
}

pub async fn remove_from_cart<H: HttpClient>(state: &AppState<H>, item_id: &str) -> AppResult<()> {
    checkout::remove_item(state, item_id).await?;
    cart(state).await
}

pub async fn clear_cart<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    checkout::clear_cart(state).await?;
    println!("Cart cleared");
    Ok(())
}

pub async fn checkout<H: HttpClient>(state: &AppState<H>, args: CheckoutArgs) -> AppResult<()> {
    let form = CheckoutForm {
        delivery_address: args.address,
        delivery_phone: args.phone,
        notes: args.notes,
        payment_method: args.pay.into(),
    };
    let nav = checkout::place_order(state, &form).await?;
    print_navigation(&nav);
    Ok(())
}

pub async fn payment_status<H: HttpClient>(
    state: &AppState<H>,
    session_id: Option<String>,
) -> AppResult<()> {
    let verifier = PaymentVerifier::new(session_id, &state.config);
    eprintln!("Verifying payment...");
    match verifier.verify(state, &ctrl_c_token()).await {
        PaymentOutcome::Success(tx) => {
            println!("Payment Successful!");
            println!("  Transaction ID  {}", tx.transaction_id);
            println!("  Amount          {}", format_amount(tx.amount));
        }
        PaymentOutcome::Unknown(reason) => {
            tracing::debug!(?reason, "Payment not confirmed");
            println!("{}", payment::UNKNOWN_TITLE);
            println!("  {}", payment::UNKNOWN_MESSAGE);
        }
    }
    Ok(())
}

pub async fn order<H: HttpClient>(state: &AppState<H>, order_id: &str) -> AppResult<()> {
    let view = tracking::load_order(state, order_id).await?;
    output::order_view(&view);
    Ok(())
}

/// Follow an order until it is delivered or cancelled, or Ctrl-C
pub async fn watch_order<H>(
    state: Arc<AppState<H>>,
    order_id: &str,
    printer: &mut NotificationPrinter,
) -> AppResult<()>
where
    H: HttpClient + 'static,
{
    let mut page = OrderTracking::open(state, order_id).await?;
    let cancel = ctrl_c_token();
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            update = page.changed() => {
                printer.flush();
                let Some(view) = update else { break };
                output::order_view(&view);
                if view.order.status.is_terminal() {
                    break;
                }
            }
        }
    }
    page.close().await;
    Ok(())
}

pub async fn reservation<H: HttpClient>(state: &AppState<H>, reservation_id: &str) -> AppResult<()> {
    let view = tracking::load_reservation(state, reservation_id).await?;
    output::reservation_view(&view);
    Ok(())
}

pub async fn profile<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    let data = profile::load(state).await?;
    println!("My Orders");
    output::orders(&data.orders);
    println!("\nMy Reservations");
    output::reservations(&data.reservations);
    Ok(())
}

pub async fn watch_profile<H>(
    state: Arc<AppState<H>>,
    printer: &mut NotificationPrinter,
) -> AppResult<()>
where
    H: HttpClient + 'static,
{
    let mut page = ProfilePage::open(state).await?;
    println!("{} <{}>", page.user().name, page.user().email);
    let cancel = ctrl_c_token();
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            update = page.changed() => {
                printer.flush();
                let Some(data) = update else { break };
                println!("\nMy Orders");
                output::orders(&data.orders);
                println!("\nMy Reservations");
                output::reservations(&data.reservations);
            }
        }
    }
    page.close().await;
    Ok(())
}
