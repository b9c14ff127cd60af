//! Error types for the stock rules engine.

use crate::framework::StoreError;
use crate::model::{Serial, Violations};
use std::fmt::Display;
use thiserror::Error;

/// How a missing product was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    Name(String),
    Serial(Serial),
}

impl Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKey::Name(name) => write!(f, "name {}", name),
            ProductKey::Serial(serial) => write!(f, "serial {}", serial),
        }
    }
}

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A product with the same name is already stored.
    #[error("Product with name {name} already registered in the system.")]
    AlreadyExists { name: String },

    /// No product matches the name or serial.
    #[error("Product with {0} not found in the system.")]
    NotFound(ProductKey),

    /// Incrementing would push the quantity above `max`.
    #[error("Product with serial {serial} to increment informed exceeds the max stock capacity: {delta}")]
    StockExceeded { serial: Serial, delta: u32 },

    /// Decrementing would push the quantity below zero.
    #[error("Product with serial {serial} has a smaller stock than the amount to decrement: {delta}")]
    StockInsufficient { serial: Serial, delta: u32 },

    /// The request did not pass field validation.
    #[error("Validation failed: {0}")]
    ValidationFailed(Violations),

    /// The record store could not be reached.
    #[error("Product storage unavailable: {0}")]
    Storage(#[from] StoreError),
}

impl ProductError {
    pub fn not_found_by_name(name: impl Into<String>) -> Self {
        ProductError::NotFound(ProductKey::Name(name.into()))
    }

    pub fn not_found_by_serial(serial: Serial) -> Self {
        ProductError::NotFound(ProductKey::Serial(serial))
    }
}

impl From<Violations> for ProductError {
    fn from(violations: Violations) -> Self {
        ProductError::ValidationFailed(violations)
    }
}
