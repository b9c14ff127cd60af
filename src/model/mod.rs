//! Pure data structures: the [`Product`] record, its wire format and field rules.

pub mod fixtures;
pub mod product;
pub mod validation;

pub use product::*;
pub use validation::{validate, Violation, Violations};
