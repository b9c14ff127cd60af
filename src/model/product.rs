/// Represents a product in the inventory.
///
/// # Storage
/// This struct implements the [`Record`](crate::framework::Record) trait, so it can be kept
/// by a [`RecordStore`](crate::framework::RecordStore) and looked up by serial or by name.
///
/// Stock adjustments live with the rules engine, see
/// [`StockAdjustment`](crate::stock::StockAdjustment).
use crate::framework::Record;
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

/// Caller-assigned identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Serial(pub u64);

impl Display for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Medication,
    Cleaning,
    Feed,
    Treat,
    Toy,
    Apparel,
}

impl ProductType {
    pub fn description(&self) -> &'static str {
        match self {
            ProductType::Medication => "Medication",
            ProductType::Cleaning => "Cleaning",
            ProductType::Feed => "Feed",
            ProductType::Treat => "Treat",
            ProductType::Toy => "Toy",
            ProductType::Apparel => "Apparel",
        }
    }
}

/// A tracked inventory item.
///
/// Field rules are checked with [`validate`](crate::model::validate) before a record
/// reaches the rules engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[garde(skip)]
    #[schema(value_type = u64)]
    pub serial: Serial,
    #[garde(length(chars, min = 1, max = 200))]
    pub name: String,
    #[garde(length(chars, min = 1, max = 200))]
    pub brand: String,
    #[garde(range(max = 100))]
    pub quantity: u32,
    #[garde(range(max = 500))]
    pub max: u32,
    #[garde(range(min = 0.0))]
    pub purchase_price: f64,
    #[serde(rename = "type")]
    #[garde(skip)]
    pub product_type: ProductType,
}

impl Record for Product {
    type Id = Serial;

    fn id(&self) -> Serial {
        self.serial
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of the increment and decrement requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuantityChange {
    #[garde(range(min = 1))]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;
    use serde_json::json;

    #[test]
    fn test_product_wire_format() {
        let value = serde_json::to_value(fixtures::product()).unwrap();
        assert_eq!(
            value,
            json!({
                "serial": 1,
                "name": "Daily Feed",
                "brand": "Magnus",
                "quantity": 10,
                "max": 50,
                "purchasePrice": 50.0,
                "type": "FEED",
            })
        );
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let body = json!({
            "serial": 1, "name": "a", "brand": "b", "quantity": 1,
            "max": 2, "purchasePrice": 1.0, "type": "FURNITURE",
        });
        assert!(serde_json::from_value::<Product>(body).is_err());
    }

    #[test]
    fn test_record_identity() {
        let product = fixtures::product();
        assert_eq!(Record::id(&product), Serial(1));
        assert_eq!(Record::name(&product), "Daily Feed");
        assert_eq!(product.product_type.description(), "Feed");
    }
}
