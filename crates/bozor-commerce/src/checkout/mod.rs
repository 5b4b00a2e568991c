//! Checkout module.
//!
//! Delivery method surcharges, the delivery form with its presence-only
//! validation, and the order total computation. Submission is simulated:
//! once validation passes it is accepted unconditionally.

mod delivery;
mod form;
mod order;

pub use delivery::{DeliveryMethod, EXPRESS_DELIVERY_COST, STANDARD_DELIVERY_COST};
pub use form::{is_known_region, DeliveryForm, MissingField, REGIONS};
pub use order::{OrderDraft, OrderReceipt, OrderTotals};
