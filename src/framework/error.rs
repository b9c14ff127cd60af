//! # Store Errors
//!
//! Failures of the channel plumbing between a [`StoreClient`](crate::framework::StoreClient)
//! and its [`RecordStore`](crate::framework::RecordStore). Business outcomes (missing
//! records, duplicate names) are never reported here; the store answers `None` and the
//! caller decides what that means.

/// Errors that can occur while talking to a record store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Record store closed")]
    StoreClosed,
    #[error("Record store dropped response channel")]
    StoreDropped,
}
