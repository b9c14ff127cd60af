//! # Stock Service
//!
//! The rules engine. Every operation is a fresh fetch, check, mutate and save cycle
//! against the injected [`ProductRepository`]; the service keeps no state of its own.
//!
//! ## Concurrency
//!
//! Each storage call is applied atomically by the store, but a cycle spans several calls.
//! Two adjustments of the same serial running at once can both read the old quantity, and
//! two creates with the same name can both pass the uniqueness check. No locking is done
//! here; callers that need stronger guarantees must serialise requests themselves.

use super::actions::StockAdjustment;
use super::error::ProductError;
use crate::clients::ProductRepository;
use crate::model::{Product, Serial};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Product operations with their business checks.
#[derive(Clone)]
pub struct StockService {
    repository: Arc<dyn ProductRepository>,
}

impl StockService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new product.
    ///
    /// Only the name is checked for duplicates; a serial that is already taken is
    /// overwritten by the store.
    #[instrument(skip(self, product), fields(serial = %product.serial, name = %product.name))]
    pub async fn create(&self, product: Product) -> Result<Product, ProductError> {
        if self.repository.find_by_name(&product.name).await?.is_some() {
            warn!("Name already registered");
            return Err(ProductError::AlreadyExists { name: product.name });
        }
        let saved = self.repository.save(product).await?;
        info!("Created");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Product, ProductError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ProductError::not_found_by_name(name))
    }

    #[instrument(skip(self))]
    pub async fn find_by_serial(&self, serial: Serial) -> Result<Product, ProductError> {
        self.verify_exists(serial).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.repository.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_serial(&self, serial: Serial) -> Result<(), ProductError> {
        self.verify_exists(serial).await?;
        self.repository.delete_by_serial(serial).await?;
        info!("Deleted");
        Ok(())
    }

    /// Adds `delta` units, up to and including `max`.
    pub async fn increment(&self, serial: Serial, delta: u32) -> Result<Product, ProductError> {
        self.adjust(serial, StockAdjustment::Increment(delta)).await
    }

    /// Removes `delta` units, down to and including zero.
    pub async fn decrement(&self, serial: Serial, delta: u32) -> Result<Product, ProductError> {
        self.adjust(serial, StockAdjustment::Decrement(delta)).await
    }

    #[instrument(skip(self))]
    async fn adjust(
        &self,
        serial: Serial,
        adjustment: StockAdjustment,
    ) -> Result<Product, ProductError> {
        let current = self.verify_exists(serial).await?;
        let adjusted = current.adjusted(adjustment).inspect_err(|e| {
            warn!(quantity = current.quantity, max = current.max, error = %e, "Adjustment rejected");
        })?;
        let saved = self.repository.save(adjusted).await?;
        info!(quantity = saved.quantity, "Stock adjusted");
        Ok(saved)
    }

    async fn verify_exists(&self, serial: Serial) -> Result<Product, ProductError> {
        self.repository
            .find_by_serial(serial)
            .await?
            .ok_or(ProductError::not_found_by_serial(serial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::framework::mock::MockStore;
    use crate::framework::StoreError;
    use crate::model::fixtures;

    fn service_over(mock: &MockStore<Product>) -> StockService {
        StockService::new(Arc::new(ProductClient::new(mock.client())))
    }

    #[tokio::test]
    async fn test_create_saves_unchanged_record() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_name("Daily Feed").return_ok(None);
        mock.expect_save().return_saved();

        let created = service_over(&mock).create(fixtures::product()).await;

        assert_eq!(created, Ok(fixtures::product()));
        assert_eq!(mock.saved(), vec![fixtures::product()]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_with_taken_name_does_not_save() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_name("Daily Feed")
            .return_ok(Some(fixtures::product()));

        let created = service_over(&mock)
            .create(fixtures::product_named(2, "Daily Feed"))
            .await;

        assert_eq!(
            created,
            Err(ProductError::AlreadyExists {
                name: "Daily Feed".into()
            })
        );
        assert!(mock.saved().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_name_missing() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_name("ghost").return_ok(None);

        let result = service_over(&mock).find_by_name("ghost").await;

        assert_eq!(result, Err(ProductError::not_found_by_name("ghost")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_unknown_serial_does_not_reach_store_delete() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(9)).return_ok(None);

        let result = service_over(&mock).delete_by_serial(Serial(9)).await;

        assert_eq!(result, Err(ProductError::not_found_by_serial(Serial(9))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(1)).return_ok(Some(fixtures::product()));
        mock.expect_delete(Serial(1))
            .return_ok(Some(fixtures::product()));

        assert_eq!(service_over(&mock).delete_by_serial(Serial(1)).await, Ok(()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_increment_saves_new_quantity() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(1)).return_ok(Some(fixtures::product()));
        mock.expect_save().return_saved();

        let result = service_over(&mock).increment(Serial(1), 10).await.unwrap();

        assert_eq!(result.quantity, 20);
        assert_eq!(mock.saved()[0].quantity, 20);
        mock.verify();
    }

    #[tokio::test]
    async fn test_increment_past_max_leaves_store_untouched() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(1)).return_ok(Some(fixtures::product()));

        let result = service_over(&mock).increment(Serial(1), 41).await;

        assert_eq!(
            result,
            Err(ProductError::StockExceeded {
                serial: Serial(1),
                delta: 41
            })
        );
        assert!(mock.saved().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_decrement_below_zero_leaves_store_untouched() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(1)).return_ok(Some(fixtures::product()));

        let result = service_over(&mock).decrement(Serial(1), 11).await;

        assert_eq!(
            result,
            Err(ProductError::StockInsufficient {
                serial: Serial(1),
                delta: 11
            })
        );
        assert!(mock.saved().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_decrement_unknown_serial() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(2)).return_ok(None);

        let result = service_over(&mock).decrement(Serial(2), 1).await;

        assert_eq!(result, Err(ProductError::not_found_by_serial(Serial(2))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_save_during_increment_is_storage_error() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(Serial(1)).return_ok(Some(fixtures::product()));
        mock.expect_save().return_err(StoreError::StoreDropped);

        let result = service_over(&mock).increment(Serial(1), 5).await;

        assert_eq!(result, Err(ProductError::Storage(StoreError::StoreDropped)));
        assert!(mock.saved().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_storage_error() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_list().return_err(StoreError::StoreClosed);

        let result = service_over(&mock).list_all().await;

        assert_eq!(result, Err(ProductError::Storage(StoreError::StoreClosed)));
        mock.verify();
    }
}
