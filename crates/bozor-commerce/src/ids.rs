//! Typed listing identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog listing.
///
/// Listings carry small fixed integer ids assigned by the seed data; the
/// newtype keeps them from being confused with quantities or prices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ListingId(u32);

impl ListingId {
    /// Create a listing id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ListingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_get() {
        let id = ListingId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ListingId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: ListingId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
