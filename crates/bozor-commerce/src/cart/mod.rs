//! Shopping cart module.
//!
//! The cart is the single source of truth for "what is being bought":
//! an insertion-ordered line sequence, unique per listing, with a hard
//! quantity bound per line. [`PersistentCart`] wraps it with the durable
//! store so every mutation survives a reload.

mod cart;
mod store;

pub use cart::{Cart, CartLine, ListingSnapshot, MAX_QUANTITY_PER_LINE};
pub use store::{PersistentCart, CART_STORAGE_KEY};
