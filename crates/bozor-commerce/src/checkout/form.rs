//! Delivery address form and validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed list of delivery regions.
pub const REGIONS: [&str; 13] = [
    "Toshkent",
    "Samarqand",
    "Buxoro",
    "Andijon",
    "Namangan",
    "Qashqadaryo",
    "Surxondaryo",
    "Farg'ona",
    "Jizzax",
    "Sirdaryo",
    "Navoiy",
    "Xorazm",
    "Qoraqalpog'iston",
];

/// Check whether `name` is one of the enumerated delivery regions.
pub fn is_known_region(name: &str) -> bool {
    REGIONS.contains(&name)
}

/// A required delivery field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingField {
    FullName,
    Phone,
    Region,
    Address,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::FullName => "full name",
            MissingField::Phone => "phone",
            MissingField::Region => "region",
            MissingField::Address => "address",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The delivery address form.
///
/// All fields are required free text; validation checks presence only,
/// except the region, which must be one of [`REGIONS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryForm {
    pub full_name: String,
    pub phone: String,
    pub region: String,
    pub address: String,
}

impl DeliveryForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form, returning every missing or invalid field.
    ///
    /// An empty result means the form can be submitted. An unknown
    /// region reports as a missing region.
    pub fn validate(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push(MissingField::FullName);
        }
        if self.phone.trim().is_empty() {
            missing.push(MissingField::Phone);
        }
        if !is_known_region(&self.region) {
            missing.push(MissingField::Region);
        }
        if self.address.trim().is_empty() {
            missing.push(MissingField::Address);
        }
        missing
    }

    /// Whether every required field is present.
    pub fn is_complete(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> DeliveryForm {
        DeliveryForm {
            full_name: "Aziz Karimov".to_string(),
            phone: "+998 90 123 45 67".to_string(),
            region: "Samarqand".to_string(),
            address: "Registon ko'chasi 1".to_string(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(complete().is_complete());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let missing = DeliveryForm::new().validate();
        assert_eq!(
            missing,
            vec![
                MissingField::FullName,
                MissingField::Phone,
                MissingField::Region,
                MissingField::Address,
            ]
        );
    }

    #[test]
    fn single_missing_field_is_reported_alone() {
        let mut form = complete();
        form.address.clear();
        assert_eq!(form.validate(), vec![MissingField::Address]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = complete();
        form.full_name = "   ".to_string();
        assert_eq!(form.validate(), vec![MissingField::FullName]);
    }

    #[test]
    fn unknown_region_counts_as_missing_region() {
        let mut form = complete();
        form.region = "Atlantis".to_string();
        assert_eq!(form.validate(), vec![MissingField::Region]);
    }

    #[test]
    fn region_list_is_closed() {
        assert!(is_known_region("Toshkent"));
        assert!(!is_known_region("toshkent"));
    }
}
