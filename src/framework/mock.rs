//! # Mock Store
//!
//! Utilities for testing code that talks to a [`StoreClient`] without running a real
//! [`RecordStore`](crate::framework::RecordStore).
//!
//! [`MockStore`] answers requests from a queue of scripted expectations. For lower-level
//! control, [`channel_store`] hands back the raw request receiver so a test can inspect
//! each message and reply by hand with the `next_*` helpers.

use crate::framework::{Record, StoreClient, StoreError, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: Record> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    FindByName {
        name: String,
        response: Result<Option<T>, StoreError>,
    },
    Save {
        response: Option<StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
}

struct Script<T: Record> {
    expectations: VecDeque<Expectation<T>>,
    saved: Vec<T>,
    failures: Vec<String>,
}

type Shared<T> = Arc<Mutex<Script<T>>>;

/// A scripted store with expectation tracking.
///
/// Requests must arrive in the order the expectations were declared. A request that does
/// not match the next expectation is recorded as a failure and its responder is dropped,
/// so the caller sees [`StoreError::StoreDropped`]; [`MockStore::verify`] then panics.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Product>::new();
/// mock.expect_find_by_name("Daily Feed").return_ok(None);
/// mock.expect_save().return_saved();
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify();
/// ```
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    script: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let script: Shared<T> = Arc::new(Mutex::new(Script {
            expectations: VecDeque::new(),
            saved: Vec::new(),
            failures: Vec::new(),
        }));
        let script_clone = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut script = script_clone.lock().unwrap();
                let expectation = script.expectations.pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindByName { name, respond_to },
                        Some(Expectation::FindByName { name: expected, response }),
                    ) if name == expected => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Save { record, respond_to }, Some(Expectation::Save { response })) => {
                        match response {
                            Some(e) => {
                                let _ = respond_to.send(Err(e));
                            }
                            None => {
                                script.saved.push(record.clone());
                                let _ = respond_to.send(Ok(record));
                            }
                        }
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        script.failures.push(format!("Unexpected request: {:?}", request));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> LookupExpectationBuilder<T> {
        LookupExpectationBuilder {
            key: Lookup::Id(id),
            script: self.script.clone(),
        }
    }

    /// Expects a `find_by_name` for `name`.
    pub fn expect_find_by_name(&mut self, name: impl Into<String>) -> LookupExpectationBuilder<T> {
        LookupExpectationBuilder {
            key: Lookup::Name(name.into()),
            script: self.script.clone(),
        }
    }

    /// Expects a `delete` for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> LookupExpectationBuilder<T> {
        LookupExpectationBuilder {
            key: Lookup::Delete(id),
            script: self.script.clone(),
        }
    }

    /// Expects a `save`.
    pub fn expect_save(&mut self) -> SaveExpectationBuilder<T> {
        SaveExpectationBuilder {
            script: self.script.clone(),
        }
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            script: self.script.clone(),
        }
    }

    /// Records passed to `save`, in arrival order.
    pub fn saved(&self) -> Vec<T> {
        self.script.lock().unwrap().saved.clone()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let script = self.script.lock().unwrap();
        if !script.failures.is_empty() {
            panic!("Mock store received unexpected requests: {:?}", script.failures);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

enum Lookup<Id> {
    Id(Id),
    Name(String),
    Delete(Id),
}

/// Builder for `get`, `find_by_name` and `delete` expectations.
pub struct LookupExpectationBuilder<T: Record> {
    key: Lookup<T::Id>,
    script: Shared<T>,
}

impl<T: Record> LookupExpectationBuilder<T> {
    /// Sets the expectation to answer with `value`.
    pub fn return_ok(self, value: Option<T>) {
        let response = Ok(value);
        let expectation = match self.key {
            Lookup::Id(id) => Expectation::Get { id, response },
            Lookup::Name(name) => Expectation::FindByName { name, response },
            Lookup::Delete(id) => Expectation::Delete { id, response },
        };
        self.script.lock().unwrap().expectations.push_back(expectation);
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder<T: Record> {
    script: Shared<T>,
}

impl<T: Record> SaveExpectationBuilder<T> {
    /// Accepts the record and echoes it back, as the real store does.
    pub fn return_saved(self) {
        let mut script = self.script.lock().unwrap();
        script.expectations.push_back(Expectation::Save { response: None });
    }

    /// Sets the expectation to answer with an error.
    pub fn return_err(self, error: StoreError) {
        let mut script = self.script.lock().unwrap();
        script
            .expectations
            .push_back(Expectation::Save { response: Some(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Record> {
    script: Shared<T>,
}

impl<T: Record> ListExpectationBuilder<T> {
    /// Sets the expectation to answer with `records`.
    pub fn return_ok(self, records: Vec<T>) {
        let mut script = self.script.lock().unwrap();
        script
            .expectations
            .push_back(Expectation::List { response: Ok(records) });
    }

    /// Sets the expectation to answer with an error.
    pub fn return_err(self, error: StoreError) {
        let mut script = self.script.lock().unwrap();
        script
            .expectations
            .push_back(Expectation::List { response: Err(error) });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// Nothing answers the requests: the test takes each one off `receiver` (see
/// [`next_get`], [`next_save`]) and replies through the returned responder. Useful to
/// assert the exact payload a caller sends.
pub fn channel_store<T: Record>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Takes the next message if it is a Get request.
pub async fn next_get<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Takes the next message if it is a Save request.
pub async fn next_save<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}
