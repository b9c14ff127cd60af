//! Runtime orchestration and lifecycle management.
//!
//! - [`StockSystem`] - starts the product store, wires the [`StockService`](crate::stock::StockService)
//!   to it and shuts it down
//! - [`setup_tracing`] - initialises the tracing/logging infrastructure

pub mod stock_system;
pub mod tracing;

pub use stock_system::*;
pub use tracing::*;
