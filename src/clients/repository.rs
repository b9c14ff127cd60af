use crate::framework::StoreError;
use crate::model::{Product, Serial};
use async_trait::async_trait;

/// The storage capability the rules engine depends on.
///
/// Five operations and nothing else. Implementations report only transport failures;
/// "not there" is `Ok(None)` and the caller decides whether that is an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_serial(&self, serial: Serial) -> Result<Option<Product>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError>;

    /// Inserts or replaces the product with the same serial.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    /// Removes the product, answering with what was removed.
    async fn delete_by_serial(&self, serial: Serial) -> Result<Option<Product>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;
}
