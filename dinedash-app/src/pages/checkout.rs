//! Cart and checkout page

use dinedash_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{CheckoutRequest, OrderCreate, PaymentMethod, PaymentType};
use shared::money;

use super::{Navigation, reported};
use crate::core::{AppError, AppResult, AppState, CartItem, Route};

/// Flat delivery fee added to the displayed total
pub const DELIVERY_FEE: f64 = 40.0;

/// Subtotal plus delivery fee
///
/// Display only: the order is created with the item total.
pub fn grand_total(subtotal: f64) -> f64 {
    money::to_f64(money::to_decimal(subtotal) + money::to_decimal(DELIVERY_FEE))
}

/// Delivery details entered at checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    pub delivery_address: String,
    pub delivery_phone: String,
    pub notes: Option<String>,
    pub payment_method: PaymentMethod,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            delivery_address: String::new(),
            delivery_phone: String::new(),
            notes: None,
            payment_method: PaymentMethod::Cod,
        }
    }
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.delivery_address.trim().is_empty() || self.delivery_phone.trim().is_empty() {
            return Err(AppError::validation(ErrorCode::DeliveryDetailsMissing));
        }
        Ok(())
    }
}

/// Cart contents as shown on the checkout page
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub restaurant_id: String,
    pub restaurant_name: Option<String>,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub grand_total: f64,
}

/// Current cart, `None` when it is empty
pub async fn summary<H: HttpClient>(state: &AppState<H>) -> AppResult<Option<CartSummary>> {
    state.require_auth().await?;

    let cart = state.cart.read().await;
    let Some(restaurant_id) = cart.restaurant_id().filter(|_| !cart.is_empty()) else {
        return Ok(None);
    };
    let subtotal = cart.total_amount();
    Ok(Some(CartSummary {
        restaurant_id: restaurant_id.to_string(),
        restaurant_name: cart.restaurant_name().map(str::to_string),
        items: cart.items().to_vec(),
        subtotal,
        delivery_fee: DELIVERY_FEE,
        grand_total: grand_total(subtotal),
    }))
}

/// Set a line's quantity, zero or less removes it
pub async fn update_quantity<H: HttpClient>(
    state: &AppState<H>,
    item_id: &str,
    quantity: i64,
) -> AppResult<()> {
    state
        .cart
        .write()
        .await
        .update_quantity(item_id, quantity)
        .map_err(|e| reported(state, e, "Failed to update cart"))
}

pub async fn remove_item<H: HttpClient>(state: &AppState<H>, item_id: &str) -> AppResult<()> {
    state
        .cart
        .write()
        .await
        .remove_item(item_id)
        .map_err(|e| reported(state, e, "Failed to update cart"))
}

pub async fn clear_cart<H: HttpClient>(state: &AppState<H>) -> AppResult<()> {
    state
        .cart
        .write()
        .await
        .clear()
        .map_err(|e| reported(state, e, "Failed to update cart"))
}

/// Create the order from the cart
///
/// Cash on delivery clears the cart and opens order tracking; card payment
/// hands over to the hosted checkout page and keeps the cart until the
/// payment is confirmed.
pub async fn place_order<H: HttpClient>(
    state: &AppState<H>,
    form: &CheckoutForm,
) -> AppResult<Navigation> {
    state.require_auth().await?;
    form.validate().map_err(|e| reported(state, e, ""))?;

    let request = {
        let cart = state.cart.read().await;
        let restaurant_id = cart
            .restaurant_id()
            .filter(|_| !cart.is_empty())
            .ok_or_else(|| reported(state, AppError::validation(ErrorCode::CartEmpty), ""))?;
        OrderCreate {
            restaurant_id: restaurant_id.to_string(),
            items: cart.to_order_items(),
            delivery_address: form.delivery_address.trim().to_string(),
            delivery_phone: form.delivery_phone.trim().to_string(),
            notes: form.notes.clone().filter(|n| !n.trim().is_empty()),
            payment_method: form.payment_method.clone(),
        }
    };

    let order = state
        .api
        .create_order(&request)
        .await
        .map_err(|e| reported(state, e, "Failed to place order"))?;
    tracing::info!(
        order_id = %order.order_id,
        restaurant_id = %order.restaurant_id,
        total = order.total_amount,
        payment_method = %order.payment_method,
        "Order created"
    );

    match form.payment_method {
        PaymentMethod::Stripe => {
            let session = state
                .api
                .create_checkout(&CheckoutRequest {
                    payment_type: PaymentType::Order,
                    reference_id: order.order_id.clone(),
                    origin_url: state.config.origin_url.clone(),
                })
                .await
                .map_err(|e| reported(state, e, "Failed to place order"))?;
            Ok(Navigation::External(session.url))
        }
        _ => {
            if let Err(e) = state.cart.write().await.clear() {
                tracing::warn!(error = %e, "Order placed but cart could not be cleared");
            }
            state.notifier.success("Order placed successfully!");
            Ok(Navigation::To(Route::Order(order.order_id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_total_adds_delivery_fee() {
        assert_eq!(grand_total(200.0), 240.0);
        assert_eq!(grand_total(0.1 + 0.2), 40.3);
    }

    #[test]
    fn test_form_requires_address_and_phone() {
        let mut form = CheckoutForm::default();
        assert_eq!(form.payment_method, PaymentMethod::Cod);
        let err = form.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::DeliveryDetailsMissing);
        assert_eq!(err.to_string(), "Please fill in delivery details");

        form.delivery_address = "12 MG Road".into();
        form.delivery_phone = "   ".into();
        assert!(form.validate().is_err());

        form.delivery_phone = "9876543210".into();
        assert!(form.validate().is_ok());
    }
}
