//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging with the `tracing` crate for the whole
//! service. The compact format hides module paths (`with_target(false)`); records carry
//! their context as fields (`serial`, `name`, `record_type`, `size`) instead.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: start and shutdown with the final record count (info)
//! - **Storage Operations**: every Save, Get, FindByName, Delete and List (debug)
//! - **Rules Engine**: spans for each service call; creations, deletions and stock
//!   changes (info); rejected creations and adjustments (warn)
//! - **HTTP**: one line per request from actix-web's logger middleware
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default
//! product-stock --log info
//!
//! # Show every storage message with full records
//! RUST_LOG=debug product-stock
//!
//! # Only the rules engine at debug
//! RUST_LOG=info,product_stock::stock=debug product-stock
//! ```
//!
//! `RUST_LOG`, when set, wins over the configured filter.

use tracing_subscriber::EnvFilter;

/// Initialises the global subscriber. Call once, at startup.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
