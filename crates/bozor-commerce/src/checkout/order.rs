//! Order draft and simulated submission.

use crate::cart::Cart;
use crate::checkout::{DeliveryForm, DeliveryMethod};
use crate::error::MarketError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The computed price breakdown for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Cart total before delivery.
    pub subtotal: Money,
    /// Flat delivery surcharge.
    pub delivery: Money,
    /// What gets charged: subtotal plus delivery.
    pub total: Money,
}

/// The ephemeral checkout state: chosen delivery method plus the filled
/// form, computed against the cart at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Chosen delivery method.
    pub delivery: DeliveryMethod,
    /// Delivery address form.
    pub form: DeliveryForm,
}

impl OrderDraft {
    /// Create a draft.
    pub fn new(delivery: DeliveryMethod, form: DeliveryForm) -> Self {
        Self { delivery, form }
    }

    /// Compute the totals for this draft against a cart.
    ///
    /// The delivery method only ever moves the delivery line; the
    /// subtotal is the cart's alone.
    pub fn totals(&self, cart: &Cart) -> OrderTotals {
        let subtotal = cart.total_price();
        let delivery = self.delivery.cost();
        OrderTotals {
            subtotal,
            delivery,
            total: subtotal + delivery,
        }
    }

    /// Submit the order.
    ///
    /// Validation failure returns the missing fields and mutates nothing.
    /// Once validation passes, submission is accepted unconditionally:
    /// the cart is cleared and a synthetic receipt minted. There is no
    /// retry path because there is nothing real to fail.
    pub fn submit(self, cart: &mut Cart) -> Result<OrderReceipt, MarketError> {
        let missing = self.form.validate();
        if !missing.is_empty() {
            return Err(MarketError::IncompleteDeliveryForm(missing));
        }

        let totals = self.totals(cart);
        cart.clear();

        let reference = generate_reference();
        info!(%reference, total = %totals.total, "order submitted");
        Ok(OrderReceipt {
            reference,
            delivery: self.delivery,
            totals,
        })
    }
}

/// What the customer sees after a successful submission.
///
/// Display-only: the reference is not persisted anywhere and its
/// uniqueness is not guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Synthetic order reference.
    pub reference: String,
    /// Delivery method the order was placed with.
    pub delivery: DeliveryMethod,
    /// Price breakdown at submission time.
    pub totals: OrderTotals,
}

fn generate_reference() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("ORD-{ts}")
}
