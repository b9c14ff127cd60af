//! # Stock Rules
//!
//! Uniqueness, existence and stock-bound checks for products.
//!
//! ## Structure
//!
//! - [`actions`] - [`StockAdjustment`] and the pure bound check on [`Product`](crate::model::Product)
//! - [`error`] - [`ProductError`], one variant per caller-facing outcome
//! - [`service`] - [`StockService`], the stateless fetch-check-save operations
//!
//! ## Usage
//!
//! ```rust
//! use product_stock::lifecycle::StockSystem;
//! use product_stock::model::{fixtures, Serial};
//! use product_stock::stock::ProductError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = StockSystem::new(32);
//!     let service = system.service.clone();
//!
//!     service.create(fixtures::product()).await.unwrap();
//!     let filled = service.increment(Serial(1), 40).await.unwrap();
//!     assert_eq!(filled.quantity, 50);
//!
//!     let overfilled = service.increment(Serial(1), 1).await;
//!     assert!(matches!(overfilled, Err(ProductError::StockExceeded { .. })));
//!
//!     drop(service);
//!     system.shutdown().await.unwrap();
//! }
//! ```

pub mod actions;
pub mod error;
pub mod service;

pub use actions::*;
pub use error::*;
pub use service::*;
