//! The storage seam of the rules engine: the [`ProductRepository`] trait and its
//! store-backed implementation, [`ProductClient`].

pub mod product_client;
pub mod repository;

pub use product_client::*;
pub use repository::*;
