//! # Store Messages
//!
//! The request type sent from a [`StoreClient`](crate::framework::StoreClient) to a
//! [`RecordStore`](crate::framework::RecordStore).

use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store task.
///
/// The five variants are the whole storage surface: lookup by identifier, lookup by
/// name, insert-or-replace, delete and full listing.
///
/// - **Save**: Inserts the record, or replaces the one with the same identifier.
/// - **Get**: Fetches a record by identifier.
/// - **FindByName**: Fetches a record through the name index.
/// - **Delete**: Removes a record by identifier, answering with the removed record if any.
/// - **List**: Snapshot of every record in identifier order.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Save {
        record: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByName {
        name: String,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
