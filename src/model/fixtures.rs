//! Test fixtures.
//!
//! ```rust
//! use product_stock::model::{fixtures, Product};
//!
//! let full = Product { quantity: 50, ..fixtures::product() };
//! assert_eq!(full.max, 50);
//! ```

use crate::model::{Product, ProductType, Serial};

/// A valid product with serial 1, 10 of 50 units in stock. Override fields with
/// struct-update syntax.
pub fn product() -> Product {
    Product {
        serial: Serial(1),
        name: "Daily Feed".to_string(),
        brand: "Magnus".to_string(),
        quantity: 10,
        max: 50,
        purchase_price: 50.0,
        product_type: ProductType::Feed,
    }
}

/// Same as [`product`] with a different serial and name.
pub fn product_named(serial: u64, name: &str) -> Product {
    Product {
        serial: Serial(serial),
        name: name.to_string(),
        ..product()
    }
}
