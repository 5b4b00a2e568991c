//! Listing and seller types.

use crate::ids::ListingId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Condition of a listed laptop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Condition {
    /// Brand new, unopened.
    #[default]
    New,
    /// Second-hand.
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Condition::New),
            "used" => Some(Condition::Used),
            _ => None,
        }
    }
}

/// The seller record attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Display name.
    pub name: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Whether the marketplace has verified this seller.
    pub verified: bool,
    /// Year the seller joined.
    pub member_since: u16,
}

impl Seller {
    /// Create a seller record with no reviews yet.
    pub fn new(name: impl Into<String>, member_since: u16) -> Self {
        Self {
            name: name.into(),
            rating: 0.0,
            reviews: 0,
            phone: None,
            verified: false,
            member_since,
        }
    }
}

/// One immutable catalog entry: a laptop for sale.
///
/// Listings are seeded at process start and never mutated afterwards; the
/// search engine and cart only ever read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Listing title.
    pub title: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Asking price.
    pub price: Money,
    /// New or used.
    pub condition: Condition,
    /// Chassis color.
    pub color: String,
    /// Full processor string (e.g. "Intel Core i5-12450H").
    pub processor: String,
    /// Installed RAM in GB.
    pub ram_gb: u32,
    /// Storage capacity in GB.
    pub storage_gb: u32,
    /// Screen diagonal in inches.
    pub screen_size_in: f32,
    /// Warranty in months; 0 means none.
    pub warranty_months: u32,
    /// Region the listing is posted from.
    pub location: String,
    /// Date the listing was posted.
    pub posted_date: NaiveDate,
    /// Image references, first one is the thumbnail.
    pub images: Vec<String>,
    /// Free-text description.
    pub description: String,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
    /// Key-value specification sheet.
    pub specifications: BTreeMap<String, String>,
    /// Seller record.
    pub seller: Seller,
}

impl Listing {
    /// Create a listing with the core attributes; everything else starts
    /// empty and is filled through the `with_*` builders.
    pub fn new(id: u32, title: impl Into<String>, brand: impl Into<String>, price: i64) -> Self {
        Self {
            id: ListingId::new(id),
            title: title.into(),
            brand: brand.into(),
            price: Money::new(price),
            condition: Condition::New,
            color: String::new(),
            processor: String::new(),
            ram_gb: 0,
            storage_gb: 0,
            screen_size_in: 0.0,
            warranty_months: 0,
            location: String::new(),
            posted_date: NaiveDate::default(),
            images: Vec::new(),
            description: String::new(),
            features: Vec::new(),
            specifications: BTreeMap::new(),
            seller: Seller::new("", 0),
        }
    }

    /// Set the condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the processor string.
    pub fn with_processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = processor.into();
        self
    }

    /// Set RAM, storage and screen size in one go.
    pub fn with_hardware(mut self, ram_gb: u32, storage_gb: u32, screen_size_in: f32) -> Self {
        self.ram_gb = ram_gb;
        self.storage_gb = storage_gb;
        self.screen_size_in = screen_size_in;
        self
    }

    /// Set the warranty in months.
    pub fn with_warranty(mut self, months: u32) -> Self {
        self.warranty_months = months;
        self
    }

    /// Set the posting region.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the posted date.
    pub fn posted_on(mut self, date: NaiveDate) -> Self {
        self.posted_date = date;
        self
    }

    /// Add an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a feature bullet point.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Add a specification entry.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key.into(), value.into());
        self
    }

    /// Set the seller record.
    pub fn with_seller(mut self, seller: Seller) -> Self {
        self.seller = seller;
        self
    }

    /// The processor family used for faceting: the first three
    /// whitespace-separated tokens of the processor string, so
    /// "Intel Core i5-12450H 12th Gen" collapses to "Intel Core i5-12450H".
    pub fn processor_family(&self) -> String {
        self.processor
            .split_whitespace()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the listing carries any warranty.
    pub fn has_warranty(&self) -> bool {
        self.warranty_months > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_family_takes_three_tokens() {
        let listing = Listing::new(1, "Test", "Acer", 850)
            .with_processor("Intel Core i5-12450H 12th Gen");
        assert_eq!(listing.processor_family(), "Intel Core i5-12450H");
    }

    #[test]
    fn short_processor_string_is_kept_whole() {
        let listing = Listing::new(1, "Test", "Apple", 2000).with_processor("Apple M2");
        assert_eq!(listing.processor_family(), "Apple M2");
    }

    #[test]
    fn warranty_zero_means_none() {
        let listing = Listing::new(1, "Test", "Dell", 550);
        assert!(!listing.has_warranty());
        assert!(listing.with_warranty(6).has_warranty());
    }

    #[test]
    fn condition_parse_round_trip() {
        assert_eq!(Condition::parse("new"), Some(Condition::New));
        assert_eq!(Condition::parse("Used"), Some(Condition::Used));
        assert_eq!(Condition::parse("refurbished"), None);
    }
}
