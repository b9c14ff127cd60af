//! # Product Client
//!
//! Implements [`ProductRepository`] on top of a `StoreClient<Product>`.
use crate::clients::repository::ProductRepository;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Product, Serial};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the Product record store.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ProductRepository for ProductClient {
    #[instrument(skip(self))]
    async fn find_by_serial(&self, serial: Serial) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        self.inner.get(serial).await
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        self.inner.find_by_name(name.to_owned()).await
    }

    #[instrument(skip(self, product), fields(serial = %product.serial))]
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        debug!("Sending request");
        self.inner.save(product).await
    }

    #[instrument(skip(self))]
    async fn delete_by_serial(&self, serial: Serial) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        self.inner.delete(serial).await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        self.inner.list().await
    }
}
