//! Marketplace domain logic for Bozor.
//!
//! Bozor is a classified-ads style laptop storefront. This crate holds the
//! parts with real logic and invariants, kept free of any presentation
//! concern:
//!
//! - **Catalog**: immutable listing set, injected at startup
//! - **Search**: faceted filter and stable sort over the catalog
//! - **Cart**: line items keyed by listing, quantity bounds, durable state
//! - **Checkout**: delivery form validation and order totals
//!
//! # Example
//!
//! ```rust
//! use bozor_commerce::prelude::*;
//! use bozor_store::MemoryStore;
//!
//! let catalog = Catalog::new(bozor_commerce::catalog::demo_listings());
//!
//! // Filter and sort the visible listings.
//! let query = ListingQuery::default()
//!     .with_text("acer")
//!     .with_sort(SortKey::PriceLowToHigh);
//! let visible = catalog.search(&query);
//!
//! // Put the cheapest match in the cart.
//! let mut cart = PersistentCart::restore(MemoryStore::new());
//! cart.add(ListingSnapshot::of(visible[0])).unwrap();
//! assert_eq!(cart.total_items(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;

pub use error::MarketError;
pub use ids::ListingId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MarketError;
    pub use crate::ids::ListingId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Condition, Listing, Seller};

    // Search
    pub use crate::search::{filter_and_sort, ListingQuery, RangeFilter, SortKey};

    // Cart
    pub use crate::cart::{
        Cart, CartLine, ListingSnapshot, PersistentCart, MAX_QUANTITY_PER_LINE,
    };

    // Checkout
    pub use crate::checkout::{
        DeliveryForm, DeliveryMethod, MissingField, OrderDraft, OrderReceipt, OrderTotals,
        REGIONS,
    };
}
