//! The immutable catalog and its derived facet values.

use crate::catalog::{Condition, Listing};
use crate::error::MarketError;
use crate::ids::ListingId;
use crate::search::ListingQuery;
use std::collections::BTreeSet;

/// The full set of listings, injected at startup.
///
/// Nothing mutates a catalog after construction. Filtered and sorted
/// views borrow from it; the distinct value lists below feed the filter
/// sidebar's checkbox groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Create a catalog from a listing set.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// All listings, in catalog order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by id.
    ///
    /// `None` is the "not found" state the detail page renders; the
    /// catalog is static, so there is nothing to retry.
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Look up a listing by id, or fail with [`MarketError::ListingNotFound`].
    pub fn require(&self, id: ListingId) -> Result<&Listing, MarketError> {
        self.get(id).ok_or(MarketError::ListingNotFound(id))
    }

    /// Run a query against the catalog.
    pub fn search(&self, query: &ListingQuery) -> Vec<&Listing> {
        crate::search::filter_and_sort(&self.listings, query)
    }

    /// Distinct brands, in first-seen catalog order.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.brand.as_str()))
    }

    /// Distinct colors, in first-seen catalog order.
    pub fn colors(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.color.as_str()))
    }

    /// Distinct conditions, in first-seen catalog order.
    pub fn conditions(&self) -> Vec<Condition> {
        let mut seen = BTreeSet::new();
        self.listings
            .iter()
            .map(|l| l.condition)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Distinct processor families, in first-seen catalog order.
    pub fn processor_families(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.listings
            .iter()
            .map(|l| l.processor_family())
            .filter(|f| seen.insert(f.clone()))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_listings;

    #[test]
    fn get_by_id() {
        let catalog = Catalog::new(demo_listings());
        let listing = catalog.get(ListingId::new(1)).unwrap();
        assert_eq!(listing.brand, "Acer");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = Catalog::new(demo_listings());
        assert!(catalog.get(ListingId::new(999)).is_none());
        assert!(matches!(
            catalog.require(ListingId::new(999)),
            Err(MarketError::ListingNotFound(_))
        ));
    }

    #[test]
    fn facet_values_are_distinct_in_first_seen_order() {
        let catalog = Catalog::new(demo_listings());

        // Two Acer listings, one brand entry, order of first appearance.
        assert_eq!(catalog.brands(), vec!["Acer", "HP", "Lenovo", "ASUS", "Dell"]);
        assert_eq!(
            catalog.conditions(),
            vec![Condition::New, Condition::Used]
        );
    }

    #[test]
    fn processor_families_collapse_duplicates() {
        let catalog = Catalog::new(demo_listings());
        let families = catalog.processor_families();
        assert!(families.contains(&"Intel Core i5-12450H".to_string()));
        assert_eq!(
            families.len(),
            catalog.len(),
            "demo catalog has all-distinct processors"
        );
    }
}
