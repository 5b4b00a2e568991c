//! Listing catalog module.
//!
//! The catalog is an immutable, explicitly injected listing set; every
//! visible view over it is derived, never stored back.

mod catalog;
mod listing;
mod seed;

pub use catalog::Catalog;
pub use listing::{Condition, Listing, Seller};
pub use seed::demo_listings;
