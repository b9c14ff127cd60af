//! # Record Trait
//!
//! The contract a type must satisfy to be kept by a [`RecordStore`](crate::framework::RecordStore).
//!
//! A record carries its own identifier (the store never generates one) and a name that the
//! store indexes for lookups. The store does not enforce name uniqueness; that is left to
//! whoever writes records into it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement.
///
/// # Identifiers
/// `Id` is `Ord` because the store lists records in ascending identifier order.
pub trait Record: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this record (e.g. a serial number).
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The primary key of this record.
    fn id(&self) -> Self::Id;

    /// The name under which this record can be looked up.
    fn name(&self) -> &str;
}
