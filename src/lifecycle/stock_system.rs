use crate::clients::ProductClient;
use crate::framework::RecordStore;
use crate::model::Product;
use crate::stock::StockService;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime wiring for the product stock service.
///
/// `StockSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product record store
/// - **Dependency Wiring**: Handing the store-backed repository to the [`StockService`]
///
/// # Example
///
/// ```ignore
/// let system = StockSystem::new(32);
///
/// let product = system.service.create(product).await?;
/// let product = system.service.increment(product.serial, 5).await?;
///
/// // Every clone of the service must be gone before this resolves
/// system.shutdown().await?;
/// ```
pub struct StockSystem {
    /// Rules engine backed by the running store
    pub service: StockService,

    /// Task handle of the record store (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl StockSystem {
    /// Spawns the product store and wires a service to it.
    ///
    /// `store_buffer` is the capacity of the store's request channel. Must be called from
    /// within a Tokio runtime.
    pub fn new(store_buffer: usize) -> Self {
        let (store, store_client) = RecordStore::<Product>::new(store_buffer);
        let handle = tokio::spawn(store.run());

        let repository = Arc::new(ProductClient::new(store_client));
        let service = StockService::new(repository);

        Self { service, handle }
    }

    /// Gracefully shuts down the store.
    ///
    /// Dropping the service closes this handle's side of the channel; the store exits
    /// once every other clone is dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store task finished cleanly
    /// - `Err(String)` if the store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down stock system...");

        drop(self.service);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Stock system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[tokio::test]
    async fn test_system_round_trip_and_shutdown() {
        let system = StockSystem::new(8);

        system.service.create(fixtures::product()).await.unwrap();
        let listed = system.service.list_all().await.unwrap();
        assert_eq!(listed, vec![fixtures::product()]);

        system.shutdown().await.unwrap();
    }
}
