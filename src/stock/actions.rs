//! Stock adjustments for the Product record.
//!
//! The bound checks are a pure function of the current record and the requested change,
//! so [`Product::adjusted`] never touches storage; the
//! [`StockService`](crate::stock::StockService) fetches, adjusts and saves.

use super::error::ProductError;
use crate::model::Product;

/// A requested change to a product's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    /// Adds units.
    ///
    /// # Errors
    /// Fails if the new quantity would exceed `max`.
    Increment(u32),
    /// Removes units.
    ///
    /// # Errors
    /// Fails if more units are requested than are in stock.
    Decrement(u32),
}

impl Product {
    /// Returns a copy of this product with the adjustment applied.
    ///
    /// Both bounds are inclusive: filling up to exactly `max` and draining to exactly zero
    /// succeed. Nothing is clamped; an out-of-bound request is rejected whole.
    pub fn adjusted(&self, adjustment: StockAdjustment) -> Result<Product, ProductError> {
        let quantity = match adjustment {
            StockAdjustment::Increment(delta) => self
                .quantity
                .checked_add(delta)
                .filter(|new_quantity| *new_quantity <= self.max)
                .ok_or(ProductError::StockExceeded {
                    serial: self.serial,
                    delta,
                })?,
            StockAdjustment::Decrement(delta) => {
                self.quantity
                    .checked_sub(delta)
                    .ok_or(ProductError::StockInsufficient {
                        serial: self.serial,
                        delta,
                    })?
            }
        };
        Ok(Product {
            quantity,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fixtures, Serial};

    #[test]
    fn test_increment_up_to_max() {
        let product = fixtures::product();

        let product = product.adjusted(StockAdjustment::Increment(10)).unwrap();
        assert_eq!(product.quantity, 20);

        let product = product.adjusted(StockAdjustment::Increment(30)).unwrap();
        assert_eq!(product.quantity, 50);

        let result = product.adjusted(StockAdjustment::Increment(1));
        assert_eq!(
            result,
            Err(ProductError::StockExceeded {
                serial: Serial(1),
                delta: 1
            })
        );
    }

    #[test]
    fn test_decrement_down_to_zero() {
        let product = fixtures::product();

        let product = product.adjusted(StockAdjustment::Decrement(10)).unwrap();
        assert_eq!(product.quantity, 0);

        let result = product.adjusted(StockAdjustment::Decrement(1));
        assert_eq!(
            result,
            Err(ProductError::StockInsufficient {
                serial: Serial(1),
                delta: 1
            })
        );
    }

    #[test]
    fn test_overflowing_increment_is_exceeded() {
        let product = Product {
            quantity: 1,
            max: u32::MAX,
            ..fixtures::product()
        };
        assert!(matches!(
            product.adjusted(StockAdjustment::Increment(u32::MAX)),
            Err(ProductError::StockExceeded { .. })
        ));
    }

    #[test]
    fn test_adjustment_only_touches_quantity() {
        let product = fixtures::product();
        let adjusted = product.adjusted(StockAdjustment::Decrement(3)).unwrap();
        assert_eq!(
            adjusted,
            Product {
                quantity: 7,
                ..product
            }
        );
    }
}
