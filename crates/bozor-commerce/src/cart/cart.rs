//! Cart and line item types.

use crate::catalog::Listing;
use crate::ids::ListingId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 10;

/// A denormalized capture of a listing at add-to-cart time.
///
/// The cart deliberately does not hold a live catalog reference: what was
/// added is what gets priced and displayed, even if the listing later
/// disappears from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    /// Listing id.
    pub id: ListingId,
    /// Listing title at add time.
    pub title: String,
    /// Price at add time.
    pub price: Money,
    /// Thumbnail image reference.
    pub image: String,
}

impl ListingSnapshot {
    /// Capture a listing for the cart, using its first image as the
    /// thumbnail.
    pub fn of(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            price: listing.price,
            image: listing.images.first().cloned().unwrap_or_default(),
        }
    }
}

/// One cart entry: a quantity bound to a listing snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Listing id this line refers to.
    pub id: ListingId,
    /// Title snapshot.
    pub title: String,
    /// Price snapshot.
    pub price: Money,
    /// Thumbnail snapshot.
    pub image: String,
    /// Quantity, always in `1..=MAX_QUANTITY_PER_LINE`.
    pub quantity: u32,
}

impl CartLine {
    fn from_snapshot(snapshot: ListingSnapshot) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title,
            price: snapshot.price,
            image: snapshot.image,
            quantity: 1,
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// The shopping cart: an insertion-ordered line sequence, unique by
/// listing id.
///
/// Invariants, enforced by every mutation:
/// - each listing id appears on at most one line
/// - every present line has quantity in `1..=MAX_QUANTITY_PER_LINE`;
///   a quantity-zero line is removed, never stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a persisted line sequence, re-establishing the
    /// invariants on data that may predate them: zero-quantity lines are
    /// dropped, oversized quantities capped, and only the first line per
    /// listing id kept.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for mut line in lines {
            if line.quantity == 0 || cart.get(line.id).is_some() {
                continue;
            }
            line.quantity = line.quantity.min(MAX_QUANTITY_PER_LINE);
            cart.lines.push(line);
        }
        cart
    }

    /// The current line sequence, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a listing, if present.
    pub fn get(&self, id: ListingId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Check if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_lines(&self) -> usize {
        self.lines.len()
    }

    /// Add a listing to the cart.
    ///
    /// An existing line is bumped by one, silently capped at
    /// [`MAX_QUANTITY_PER_LINE`], and keeps its position; a new listing
    /// is appended at the end with quantity 1. Returns the resulting
    /// quantity of the line.
    pub fn add(&mut self, snapshot: ListingSnapshot) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == snapshot.id) {
            line.quantity = (line.quantity + 1).min(MAX_QUANTITY_PER_LINE);
            return line.quantity;
        }
        self.lines.push(CartLine::from_snapshot(snapshot));
        1
    }

    /// Set a line's quantity exactly.
    ///
    /// Zero behaves as [`remove`](Self::remove). A quantity above
    /// [`MAX_QUANTITY_PER_LINE`] is rejected and the line left unchanged;
    /// the bound holds here regardless of caller discipline. Returns
    /// whether the cart changed.
    pub fn update_quantity(&mut self, id: ListingId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }
        if quantity > MAX_QUANTITY_PER_LINE {
            return false;
        }
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Removing an absent listing is a no-op, not an
    /// error. Returns whether a line was removed.
    pub fn remove(&mut self, id: ListingId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() < before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }
}
