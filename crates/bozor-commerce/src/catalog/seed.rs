//! Demo listing data.

use crate::catalog::{Condition, Listing, Seller};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The seeded demo catalog.
///
/// Six fixed listings covering the brands, colors, conditions and price
/// points the filter sidebar exercises. Nothing in the engine depends on
/// this data; it is one possible injected catalog.
pub fn demo_listings() -> Vec<Listing> {
    vec![
        Listing::new(1, "Acer Aspire 5 A515-57", "Acer", 850)
            .with_condition(Condition::New)
            .with_color("Silver")
            .with_processor("Intel Core i5-12450H")
            .with_hardware(8, 512, 15.6)
            .with_warranty(12)
            .with_location("Toshkent")
            .posted_on(date(2024, 1, 15))
            .with_image("/images/acer-aspire-5.jpg")
            .with_description(
                "Modern design with solid everyday performance. A balanced \
                 pick for work and study, with a fast Core i5 and room to \
                 expand the memory.",
            )
            .with_feature("Intel Core i5-12450H (2.0 GHz, up to 4.4 GHz)")
            .with_feature("8GB DDR4, expandable to 32GB")
            .with_feature("512GB PCIe NVMe SSD")
            .with_feature("15.6\" Full HD IPS display")
            .with_spec("model", "A515-57-53MN")
            .with_spec("os", "Windows 11 Home")
            .with_spec("graphics", "Intel Iris Xe Graphics")
            .with_spec("weight", "1.7 kg")
            .with_seller(Seller {
                name: "TechStore Toshkent".to_string(),
                rating: 4.8,
                reviews: 156,
                phone: Some("+998 90 123 45 67".to_string()),
                verified: true,
                member_since: 2020,
            }),
        Listing::new(2, "HP Pavilion Gaming 15", "HP", 1200)
            .with_condition(Condition::New)
            .with_color("Black")
            .with_processor("AMD Ryzen 5 5600H")
            .with_hardware(16, 1000, 15.6)
            .with_warranty(24)
            .with_location("Samarqand")
            .posted_on(date(2024, 1, 14))
            .with_image("/images/hp-pavilion-gaming.jpg")
            .with_description(
                "Purpose-built gaming laptop. Dedicated graphics and a \
                 144Hz panel handle demanding titles without strain.",
            )
            .with_feature("AMD Ryzen 5 5600H (3.3 GHz, up to 4.2 GHz)")
            .with_feature("NVIDIA GeForce GTX 1650 4GB")
            .with_feature("15.6\" Full HD 144Hz display")
            .with_spec("model", "15-dk2070wm")
            .with_spec("os", "Windows 11 Home")
            .with_spec("graphics", "NVIDIA GeForce GTX 1650 4GB")
            .with_spec("weight", "2.3 kg")
            .with_seller(Seller {
                name: "GameZone Samarqand".to_string(),
                rating: 4.9,
                reviews: 89,
                phone: Some("+998 91 234 56 78".to_string()),
                verified: true,
                member_since: 2019,
            }),
        Listing::new(3, "Lenovo ThinkPad E14", "Lenovo", 650)
            .with_condition(Condition::Used)
            .with_color("Black")
            .with_processor("Intel Core i3-1115G4")
            .with_hardware(8, 256, 14.0)
            .with_warranty(6)
            .with_location("Buxoro")
            .posted_on(date(2024, 1, 13))
            .with_image("/images/lenovo-thinkpad-e14.jpg")
            .with_description(
                "Reliable business laptop in good condition. Classic \
                 ThinkPad keyboard, light enough to carry daily.",
            )
            .with_feature("Intel Core i3-1115G4")
            .with_feature("14\" Full HD display")
            .with_spec("os", "Windows 10 Pro")
            .with_spec("weight", "1.6 kg")
            .with_seller(Seller {
                name: "Biznes Market".to_string(),
                rating: 4.6,
                reviews: 47,
                phone: None,
                verified: true,
                member_since: 2021,
            }),
        Listing::new(4, "ASUS VivoBook 15", "ASUS", 750)
            .with_condition(Condition::New)
            .with_color("Blue")
            .with_processor("Intel Core i5-1135G7")
            .with_hardware(8, 512, 15.6)
            .with_warranty(12)
            .with_location("Namangan")
            .posted_on(date(2024, 1, 12))
            .with_image("/images/asus-vivobook-15.jpg")
            .with_description(
                "Slim all-rounder with a bright finish and a comfortable \
                 NanoEdge display.",
            )
            .with_feature("Intel Core i5-1135G7")
            .with_feature("512GB PCIe SSD")
            .with_spec("os", "Windows 11 Home")
            .with_spec("weight", "1.8 kg")
            .with_seller(Seller {
                name: "Digital Plaza".to_string(),
                rating: 4.7,
                reviews: 102,
                phone: None,
                verified: false,
                member_since: 2022,
            }),
        Listing::new(5, "Acer Nitro 5 Gaming", "Acer", 1100)
            .with_condition(Condition::Used)
            .with_color("Red")
            .with_processor("Intel Core i7-11800H")
            .with_hardware(16, 512, 15.6)
            .with_warranty(3)
            .with_location("Andijon")
            .posted_on(date(2024, 1, 11))
            .with_image("/images/acer-nitro-5.jpg")
            .with_description(
                "Gaming machine with serious cooling. Lightly used, runs \
                 current titles at high settings.",
            )
            .with_feature("Intel Core i7-11800H")
            .with_feature("Dual-fan cooling")
            .with_spec("os", "Windows 11 Home")
            .with_spec("weight", "2.5 kg")
            .with_seller(Seller {
                name: "Pro Gamer Shop".to_string(),
                rating: 4.5,
                reviews: 63,
                phone: None,
                verified: true,
                member_since: 2020,
            }),
        Listing::new(6, "Dell Inspiron 15 3000", "Dell", 550)
            .with_condition(Condition::Used)
            .with_color("Silver")
            .with_processor("Intel Core i3-1005G1")
            .with_hardware(4, 256, 15.6)
            .with_warranty(0)
            .with_location("Farg'ona")
            .posted_on(date(2024, 1, 10))
            .with_image("/images/dell-inspiron-15.jpg")
            .with_description(
                "Budget pick for web and office work. Sold as-is, no \
                 warranty.",
            )
            .with_feature("Intel Core i3-1005G1")
            .with_spec("os", "Windows 10 Home")
            .with_spec("weight", "2.0 kg")
            .with_seller(Seller {
                name: "Arzon Texnika".to_string(),
                rating: 4.2,
                reviews: 28,
                phone: None,
                verified: false,
                member_since: 2023,
            }),
    ]
}
