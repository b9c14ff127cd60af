//! # Record Store
//!
//! This module defines the `RecordStore`, the task that owns every stored record. It is the
//! "server" side of the storage channel: requests arrive one at a time and are applied in
//! order, so the maps need no locking.

use crate::framework::client::StoreClient;
use crate::framework::entity::Record;
use crate::framework::message::StoreRequest;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// In-memory storage for one record type.
///
/// Records are kept in a `BTreeMap` keyed by identifier, which fixes the listing order.
/// A secondary `HashMap` maps names to identifiers for [`StoreRequest::FindByName`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `RecordStore::new()` returns the store and a cloneable client.
/// 2.  **Run**: spawn `store.run()` in a background task.
/// 3.  **Stop**: drop every client; the loop ends once the channel is closed.
///
/// ```rust
/// use product_stock::framework::RecordStore;
/// use product_stock::model::{fixtures, Product};
///
/// #[tokio::main]
/// async fn main() {
///     let (store, client) = RecordStore::<Product>::new(8);
///     tokio::spawn(store.run());
///
///     let saved = client.save(fixtures::product()).await.unwrap();
///     let found = client.find_by_name(saved.name.clone()).await.unwrap();
///     assert_eq!(found, Some(saved));
/// }
/// ```
pub struct RecordStore<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<T::Id, T>,
    names: HashMap<String, T::Id>,
}

impl<T: Record> RecordStore<T> {
    /// Creates a new `RecordStore` and its associated `StoreClient`.
    ///
    /// * `buffer_size` - capacity of the request channel. When it is full, client calls
    ///   wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            records: BTreeMap::new(),
            names: HashMap::new(),
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Product" instead of "product_stock::model::product::Product"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { record, respond_to } => {
                    let id = record.id();
                    debug!(record_type, %id, ?record, "Save");
                    self.save(record.clone());
                    debug!(record_type, %id, size = self.records.len(), "Saved");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::FindByName { name, respond_to } => {
                    let record = self
                        .names
                        .get(&name)
                        .and_then(|id| self.records.get(id))
                        .cloned();
                    debug!(record_type, %name, found = record.is_some(), "FindByName");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Delete { id, respond_to } => {
                    let removed = self.remove(&id);
                    debug!(record_type, %id, removed = removed.is_some(), size = self.records.len(), "Delete");
                    let _ = respond_to.send(Ok(removed));
                }
                StoreRequest::List { respond_to } => {
                    let records: Vec<T> = self.records.values().cloned().collect();
                    debug!(record_type, size = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }

    fn save(&mut self, record: T) {
        let id = record.id();
        let stale_name = self
            .records
            .get(&id)
            .filter(|previous| previous.name() != record.name())
            .map(|previous| previous.name().to_owned());
        if let Some(name) = stale_name {
            self.unindex(name, &id);
        }
        self.names.insert(record.name().to_owned(), id.clone());
        self.records.insert(id, record);
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.records.remove(id)?;
        self.unindex(removed.name().to_owned(), id);
        Some(removed)
    }

    // Only drop the name key while it still points at this record.
    fn unindex(&mut self, name: String, id: &T::Id) {
        if self.names.get(&name) == Some(id) {
            self.names.remove(&name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        serial: u32,
        label: String,
    }

    impl Widget {
        fn new(serial: u32, label: &str) -> Self {
            Self {
                serial,
                label: label.to_string(),
            }
        }
    }

    impl Record for Widget {
        type Id = u32;

        fn id(&self) -> u32 {
            self.serial
        }

        fn name(&self) -> &str {
            &self.label
        }
    }

    fn spawn_store() -> StoreClient<Widget> {
        let (store, client) = RecordStore::new(10);
        tokio::spawn(store.run());
        client
    }

    #[tokio::test]
    async fn test_save_then_lookup_by_id_and_name() {
        let client = spawn_store();

        let saved = client.save(Widget::new(7, "bolt")).await.unwrap();
        assert_eq!(saved, Widget::new(7, "bolt"));

        assert_eq!(client.get(7).await.unwrap(), Some(Widget::new(7, "bolt")));
        assert_eq!(
            client.find_by_name("bolt".to_string()).await.unwrap(),
            Some(Widget::new(7, "bolt"))
        );
        assert_eq!(client.get(8).await.unwrap(), None);
        assert_eq!(client.find_by_name("nut".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let client = spawn_store();
        assert!(client.list().await.unwrap().is_empty());

        client.save(Widget::new(3, "c")).await.unwrap();
        client.save(Widget::new(1, "a")).await.unwrap();
        client.save(Widget::new(2, "b")).await.unwrap();

        let ids: Vec<u32> = client.list().await.unwrap().iter().map(|w| w.serial).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_resave_with_new_name_moves_index() {
        let client = spawn_store();
        client.save(Widget::new(1, "old")).await.unwrap();
        client.save(Widget::new(1, "new")).await.unwrap();

        assert_eq!(client.find_by_name("old".to_string()).await.unwrap(), None);
        assert_eq!(
            client.find_by_name("new".to_string()).await.unwrap(),
            Some(Widget::new(1, "new"))
        );
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record_and_name() {
        let client = spawn_store();
        client.save(Widget::new(1, "bolt")).await.unwrap();

        let removed = client.delete(1).await.unwrap();
        assert_eq!(removed, Some(Widget::new(1, "bolt")));
        assert_eq!(client.get(1).await.unwrap(), None);
        assert_eq!(client.find_by_name("bolt".to_string()).await.unwrap(), None);

        // Unknown ids are not an error at this level
        assert_eq!(client.delete(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_keeps_name_owned_by_other_record() {
        let client = spawn_store();
        client.save(Widget::new(1, "shared")).await.unwrap();
        client.save(Widget::new(2, "shared")).await.unwrap();

        client.delete(1).await.unwrap();
        assert_eq!(
            client.find_by_name("shared".to_string()).await.unwrap(),
            Some(Widget::new(2, "shared"))
        );
    }

    #[tokio::test]
    async fn test_store_stops_when_clients_dropped() {
        let (store, client) = RecordStore::<Widget>::new(4);
        let handle = tokio::spawn(store.run());
        client.save(Widget::new(1, "a")).await.unwrap();
        drop(client);
        handle.await.unwrap();
    }
}
