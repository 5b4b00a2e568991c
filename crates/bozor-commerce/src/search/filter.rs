//! The filter and sort engine itself.

use crate::catalog::Listing;
use crate::search::{ListingQuery, SortKey};

impl ListingQuery {
    /// Check whether a listing passes every active filter dimension.
    ///
    /// Dimensions combine with AND; the values inside a set dimension
    /// combine with OR. An inactive dimension matches everything.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_text(listing)
            && self.price.map_or(true, |r| r.contains(listing.price))
            && self.brands_match(listing)
            && self.colors_match(listing)
            && self.conditions_match(listing)
            && self.processors_match(listing)
            && self.ram_gb.map_or(true, |r| r.contains(listing.ram_gb))
            && self
                .storage_gb
                .map_or(true, |r| r.contains(listing.storage_gb))
            && self
                .screen_size_in
                .map_or(true, |r| r.contains(listing.screen_size_in))
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        listing.title.to_lowercase().contains(&needle)
            || listing.brand.to_lowercase().contains(&needle)
    }

    fn brands_match(&self, listing: &Listing) -> bool {
        self.brands.is_empty() || self.brands.contains(&listing.brand)
    }

    fn colors_match(&self, listing: &Listing) -> bool {
        self.colors.is_empty() || self.colors.contains(&listing.color)
    }

    fn conditions_match(&self, listing: &Listing) -> bool {
        self.conditions.is_empty() || self.conditions.contains(&listing.condition)
    }

    fn processors_match(&self, listing: &Listing) -> bool {
        self.processors.is_empty()
            || self
                .processors
                .iter()
                .any(|family| listing.processor.contains(family.as_str()))
    }
}

/// Derive the ordered listing view for a query.
///
/// Pure over its inputs: the catalog slice is only read, the query only
/// borrowed, and identical inputs always produce the identical view. The
/// sort is stable, so listings that compare equal keep their catalog
/// order. An empty result is a valid outcome, not an error.
pub fn filter_and_sort<'a>(listings: &'a [Listing], query: &ListingQuery) -> Vec<&'a Listing> {
    let mut view: Vec<&Listing> = listings.iter().filter(|l| query.matches(l)).collect();

    match query.sort {
        SortKey::Newest => view.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
        SortKey::Oldest => view.sort_by(|a, b| a.posted_date.cmp(&b.posted_date)),
        SortKey::PriceLowToHigh => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHighToLow => view.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    view
}
