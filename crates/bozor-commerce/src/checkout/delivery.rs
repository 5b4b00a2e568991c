//! Delivery method options.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat surcharge for standard delivery.
///
/// Both surcharges are plain configuration constants: fixed per method,
/// never derived from cart contents or distance.
pub const STANDARD_DELIVERY_COST: Money = Money::new(20);

/// Flat surcharge for express delivery.
pub const EXPRESS_DELIVERY_COST: Money = Money::new(30);

/// How the order gets delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryMethod {
    /// Regular courier.
    #[default]
    Standard,
    /// Next-day courier.
    Express,
}

impl DeliveryMethod {
    /// The flat delivery surcharge for this method.
    pub fn cost(&self) -> Money {
        match self {
            DeliveryMethod::Standard => STANDARD_DELIVERY_COST,
            DeliveryMethod::Express => EXPRESS_DELIVERY_COST,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Standard => "standard",
            DeliveryMethod::Express => "express",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryMethod::Standard => "Standard delivery",
            DeliveryMethod::Express => "Express delivery",
        }
    }

    /// Rough delivery estimate shown next to the option.
    pub fn delivery_estimate(&self) -> &'static str {
        match self {
            DeliveryMethod::Standard => "2-3 days",
            DeliveryMethod::Express => "1 day",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(DeliveryMethod::Standard),
            "express" => Some(DeliveryMethod::Express),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_flat() {
        assert_eq!(DeliveryMethod::Standard.cost(), Money::new(20));
        assert_eq!(DeliveryMethod::Express.cost(), Money::new(30));
    }

    #[test]
    fn parse_round_trip() {
        for method in [DeliveryMethod::Standard, DeliveryMethod::Express] {
            assert_eq!(DeliveryMethod::parse(method.as_str()), Some(method));
        }
        assert_eq!(DeliveryMethod::parse("pickup"), None);
    }
}
