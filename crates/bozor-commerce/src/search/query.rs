//! Query descriptor and sort options.

use crate::catalog::Condition;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort options for the listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Most recently posted first.
    #[default]
    Newest,
    /// Oldest posting first.
    Oldest,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "price-low" => Some(SortKey::PriceLowToHigh),
            "price-high" => Some(SortKey::PriceHighToLow),
            _ => None,
        }
    }
}

/// An inclusive `[min, max]` range constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    /// Create a range filter.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies within the range, bounds included.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The complete set of active filter and sort selections.
///
/// Rebuilt by the caller on every interaction and handed to the engine;
/// a default query constrains nothing and matches the whole catalog. An
/// empty set filter means "no filter", not "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Free-text query, matched case-insensitively against title and brand.
    pub text: String,
    /// Price range, inclusive.
    pub price: Option<RangeFilter<Money>>,
    /// RAM range in GB, inclusive.
    pub ram_gb: Option<RangeFilter<u32>>,
    /// Storage range in GB, inclusive.
    pub storage_gb: Option<RangeFilter<u32>>,
    /// Screen size range in inches, inclusive, compared fractionally.
    pub screen_size_in: Option<RangeFilter<f32>>,
    /// Selected brands (exact match).
    pub brands: BTreeSet<String>,
    /// Selected colors (exact match).
    pub colors: BTreeSet<String>,
    /// Selected conditions.
    pub conditions: BTreeSet<Condition>,
    /// Selected processor families (substring match).
    pub processors: BTreeSet<String>,
    /// Active sort.
    pub sort: SortKey,
}

impl ListingQuery {
    /// A query with no constraints and the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Constrain the price range.
    pub fn with_price_range(mut self, min: i64, max: i64) -> Self {
        self.price = Some(RangeFilter::new(Money::new(min), Money::new(max)));
        self
    }

    /// Constrain the RAM range in GB.
    pub fn with_ram_range(mut self, min: u32, max: u32) -> Self {
        self.ram_gb = Some(RangeFilter::new(min, max));
        self
    }

    /// Constrain the storage range in GB.
    pub fn with_storage_range(mut self, min: u32, max: u32) -> Self {
        self.storage_gb = Some(RangeFilter::new(min, max));
        self
    }

    /// Constrain the screen size range in inches.
    pub fn with_screen_range(mut self, min: f32, max: f32) -> Self {
        self.screen_size_in = Some(RangeFilter::new(min, max));
        self
    }

    /// Add a brand to the brand filter.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Add a color to the color filter.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    /// Add a condition to the condition filter.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.insert(condition);
        self
    }

    /// Add a processor family to the processor filter.
    pub fn with_processor(mut self, family: impl Into<String>) -> Self {
        self.processors.insert(family.into());
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Drop every filter, keeping the sort selection.
    pub fn clear_filters(&mut self) {
        let sort = self.sort;
        *self = Self {
            sort,
            ..Self::default()
        };
    }

    /// Whether any filter dimension is active.
    pub fn has_filters(&self) -> bool {
        !self.text.is_empty()
            || self.price.is_some()
            || self.ram_gb.is_some()
            || self.storage_gb.is_some()
            || self.screen_size_in.is_some()
            || !self.brands.is_empty()
            || !self.colors.is_empty()
            || !self.conditions.is_empty()
            || !self.processors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_has_no_filters() {
        let query = ListingQuery::new();
        assert!(!query.has_filters());
        assert_eq!(query.sort, SortKey::Newest);
    }

    #[test]
    fn builder_accumulates_set_filters() {
        let query = ListingQuery::new()
            .with_brand("Acer")
            .with_brand("HP")
            .with_brand("Acer");
        assert_eq!(query.brands.len(), 2);
    }

    #[test]
    fn clear_filters_keeps_sort() {
        let mut query = ListingQuery::new()
            .with_text("gaming")
            .with_price_range(0, 2000)
            .with_sort(SortKey::PriceHighToLow);

        query.clear_filters();
        assert!(!query.has_filters());
        assert_eq!(query.sort, SortKey::PriceHighToLow);
    }

    #[test]
    fn range_filter_bounds_are_inclusive() {
        let range = RangeFilter::new(10.0_f32, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(range.contains(15.6));
        assert!(!range.contains(20.1));
    }

    #[test]
    fn sort_key_parse_round_trip() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::PriceLowToHigh,
            SortKey::PriceHighToLow,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("relevance"), None);
    }
}
