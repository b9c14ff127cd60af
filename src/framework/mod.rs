//! Generic in-memory record storage.
//!
//! The store runs as its own Tokio task and owns every record; callers reach it through
//! a cloneable [`StoreClient`]. Nothing here knows about products or stock rules.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that stored types implement (identifier + indexed name)
//! - [`RecordStore`] - The task that owns the records
//! - [`StoreClient`] - Type-safe handle for the five storage operations
//! - [`StoreError`] - Channel failures
//!
//! # Testing
//!
//! See [`mock`] for a scripted stand-in store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::RecordStore;
pub use client::StoreClient;
pub use entity::Record;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
