//! Cart persistence over the durable store.

use crate::cart::{Cart, CartLine, ListingSnapshot};
use crate::checkout::{OrderDraft, OrderReceipt};
use crate::error::MarketError;
use crate::ids::ListingId;
use crate::money::Money;
use bozor_store::KvStore;
use tracing::{debug, warn};

/// The fixed key the cart lives under in the durable store.
pub const CART_STORAGE_KEY: &str = "cart";

/// A cart bound to a durable store.
///
/// Every mutating operation writes the full line sequence back before
/// returning; restoring at session start is the only crash and reload
/// recovery there is. An absent or malformed persisted value silently
/// restores an empty cart.
#[derive(Debug)]
pub struct PersistentCart<S: KvStore> {
    store: S,
    cart: Cart,
}

impl<S: KvStore> PersistentCart<S> {
    /// Restore the cart persisted in `store`, or start empty.
    pub fn restore(store: S) -> Self {
        let cart = match store.get_json::<Vec<CartLine>>(CART_STORAGE_KEY) {
            Ok(Some(lines)) => Cart::from_lines(lines),
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(%err, "discarding malformed persisted cart");
                Cart::new()
            }
        };
        Self { store, cart }
    }

    /// Read access to the cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current line sequence, for rendering.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Add a listing and persist. Returns the resulting line quantity.
    pub fn add(&mut self, snapshot: ListingSnapshot) -> Result<u32, MarketError> {
        let quantity = self.cart.add(snapshot);
        self.persist()?;
        Ok(quantity)
    }

    /// Set a line's quantity and persist if anything changed. Returns
    /// whether the cart changed.
    pub fn update_quantity(&mut self, id: ListingId, quantity: u32) -> Result<bool, MarketError> {
        let changed = self.cart.update_quantity(id, quantity);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove a line and persist if it was present.
    pub fn remove(&mut self, id: ListingId) -> Result<bool, MarketError> {
        let removed = self.cart.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) -> Result<(), MarketError> {
        self.cart.clear();
        self.persist()
    }

    /// Submit an order draft against this cart.
    ///
    /// Validation failure leaves the cart untouched and unpersisted;
    /// success clears the cart and persists the empty sequence.
    pub fn submit_order(&mut self, draft: OrderDraft) -> Result<OrderReceipt, MarketError> {
        let receipt = draft.submit(&mut self.cart)?;
        self.persist()?;
        Ok(receipt)
    }

    fn persist(&mut self) -> Result<(), MarketError> {
        self.store.set_json(CART_STORAGE_KEY, &self.cart.lines())?;
        debug!(
            lines = self.cart.unique_lines(),
            items = self.cart.total_items(),
            "persisted cart"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{DeliveryForm, DeliveryMethod};
    use bozor_store::{FileStore, MemoryStore};

    fn snapshot(id: u32, price: i64) -> ListingSnapshot {
        ListingSnapshot {
            id: ListingId::new(id),
            title: format!("Listing {id}"),
            price: Money::new(price),
            image: "/images/thumb.jpg".to_string(),
        }
    }

    fn complete_form() -> DeliveryForm {
        DeliveryForm {
            full_name: "Aziz Karimov".to_string(),
            phone: "+998 90 123 45 67".to_string(),
            region: "Toshkent".to_string(),
            address: "Chilonzor 12".to_string(),
        }
    }

    #[test]
    fn mutations_persist_and_restore() {
        let mut store = MemoryStore::new();

        {
            let mut cart = PersistentCart::restore(store.clone());
            cart.add(snapshot(1, 850)).unwrap();
            cart.add(snapshot(1, 850)).unwrap();
            cart.add(snapshot(2, 1200)).unwrap();
            store = cart.store;
        }

        let restored = PersistentCart::restore(store);
        assert_eq!(restored.total_items(), 3);
        assert_eq!(restored.total_price(), Money::new(2 * 850 + 1200));
    }

    #[test]
    fn restore_from_empty_store_is_an_empty_cart() {
        let cart = PersistentCart::restore(MemoryStore::new());
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn malformed_persisted_value_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        store
            .set_value(CART_STORAGE_KEY, serde_json::json!({"not": "a cart"}))
            .unwrap();

        let cart = PersistentCart::restore(store);
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn rejected_update_does_not_touch_the_store() {
        let mut store = MemoryStore::new();
        let mut cart = PersistentCart::restore(store.clone());
        cart.add(snapshot(1, 850)).unwrap();
        store = cart.store;

        let mut cart = PersistentCart::restore(store);
        assert!(!cart.update_quantity(ListingId::new(1), 11).unwrap());
        assert_eq!(cart.cart().get(ListingId::new(1)).unwrap().quantity, 1);
    }

    #[test]
    fn successful_submission_clears_and_persists() {
        let mut store = MemoryStore::new();
        let mut cart = PersistentCart::restore(store.clone());
        cart.add(snapshot(1, 850)).unwrap();

        let draft = OrderDraft::new(DeliveryMethod::Express, complete_form());
        let receipt = cart.submit_order(draft).unwrap();
        assert_eq!(receipt.totals.total, Money::new(880));
        assert!(cart.cart().is_empty());
        store = cart.store;

        let restored = PersistentCart::restore(store);
        assert!(restored.cart().is_empty());
    }

    #[test]
    fn failed_submission_leaves_cart_and_store_alone() {
        let mut cart = PersistentCart::restore(MemoryStore::new());
        cart.add(snapshot(1, 850)).unwrap();

        let draft = OrderDraft::new(DeliveryMethod::Standard, DeliveryForm::default());
        assert!(cart.submit_order(draft).is_err());
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), Money::new(850));
    }

    #[test]
    fn file_backed_cart_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileStore::open(&path).unwrap();
            let mut cart = PersistentCart::restore(store);
            cart.add(snapshot(3, 650)).unwrap();
            cart.update_quantity(ListingId::new(3), 4).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        let cart = PersistentCart::restore(store);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Money::new(4 * 650));
    }
}
