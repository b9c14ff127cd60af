//! # Store Client
//!
//! The handle used to talk to a [`RecordStore`](crate::framework::RecordStore).

use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `RecordStore`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared across
/// tasks. Every method sends one request and awaits the one-shot reply.
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Derive would demand `T: Clone` on the sender, which it does not need.
impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn save(&self, record: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Save { record, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn find_by_name(&self, name: String) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindByName { name, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }
}
