//! # Product Stock
//!
//! > **An inventory API that tracks stock levels per product.**
//!
//! Products are created with a caller-assigned serial and a unique name, looked up by
//! name or serial, listed, deleted, and have their quantity moved up or down within
//! `0..=max`.
//!
//! ## Module Tour
//!
//! ### 1. Storage ([`framework`])
//! A generic in-memory record store running as its own Tokio task.
//! - **Key items**: [`RecordStore`](framework::RecordStore), [`StoreClient`](framework::StoreClient),
//!   [`MockStore`](framework::mock::MockStore) for tests.
//!
//! ### 2. The Seam ([`clients`])
//! The five-operation [`ProductRepository`](clients::ProductRepository) the rules engine
//! depends on, and its store-backed [`ProductClient`](clients::ProductClient).
//!
//! ### 3. The Rules ([`stock`])
//! [`StockService`](stock::StockService): duplicate-name check on create, existence
//! checks before mutation, inclusive stock bounds on increment/decrement.
//!
//! ### 4. Transport ([`api`])
//! actix-web handlers, request validation and the error-to-status mapping.
//!
//! ### 5. Runtime ([`lifecycle`], [`config`])
//! Wiring, shutdown, logging setup and server settings.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080
//! ```
//!
//! ## Known Limitation
//!
//! Stock adjustments are read-modify-write cycles over separate storage calls and are not
//! atomic; see [`stock::service`].

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod stock;
