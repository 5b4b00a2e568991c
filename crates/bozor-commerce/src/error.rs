//! Marketplace error types.

use crate::checkout::MissingField;
use crate::ids::ListingId;
use thiserror::Error;

/// Errors that can occur in marketplace operations.
///
/// The taxonomy is deliberately narrow: quantity-bound violations and
/// absent cart lines are reported as boolean no-ops by the cart itself,
/// and a malformed persisted cart is recovered silently, so neither
/// appears here.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Lookup for a listing id the catalog does not contain.
    #[error("listing not found: {0}")]
    ListingNotFound(ListingId),

    /// Order submission attempted with required delivery fields missing.
    #[error("delivery form incomplete: missing {}", .0.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))]
    IncompleteDeliveryForm(Vec<MissingField>),

    /// The durable cart store failed.
    #[error("store error: {0}")]
    Store(#[from] bozor_store::StoreError),
}
