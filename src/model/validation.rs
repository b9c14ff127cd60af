//! Explicit request validation.
//!
//! Field rules are declared with `garde` on the model types; [`validate`] runs them and
//! flattens the report into a list of [`Violation`]s that can be serialised back to the
//! caller. Field paths are reported under their camelCase JSON names, so a client can
//! match each violation to the key it sent.

use garde::Validate;
use serde::Serialize;
use std::fmt::Display;

/// One violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every constraint a value failed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| {
                if v.field.is_empty() {
                    v.message.clone()
                } else {
                    format!("{}: {}", v.field, v.message)
                }
            })
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<garde::Report> for Violations {
    fn from(report: garde::Report) -> Self {
        Self(
            report
                .iter()
                .map(|(path, error)| Violation::new(path.to_string(), error.message()))
                .collect(),
        )
    }
}

/// Checks a request body against its declared field rules.
pub fn validate<V>(value: &V) -> Result<(), Violations>
where
    V: Validate,
    V::Context: Default,
{
    value.validate().map_err(|report| {
        let mut violations = Violations::from(report);
        for violation in &mut violations.0 {
            violation.field = wire_name(&violation.field);
        }
        violations
    })
}

/// `purchase_price` -> `purchasePrice`; `items[0].unit_cost` -> `items[0].unitCost`.
fn wire_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len());
    let mut upper_next = false;
    for c in path.chars() {
        match c {
            '_' => upper_next = true,
            c if upper_next => {
                name.extend(c.to_uppercase());
                upper_next = false;
            }
            c => name.push(c),
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fixtures, Product, QuantityChange};

    fn fields(violations: &Violations) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_default_product_is_valid() {
        assert_eq!(validate(&fixtures::product()), Ok(()));
    }

    #[test]
    fn test_limits_are_inclusive() {
        let product = Product {
            name: "n".repeat(200),
            quantity: 100,
            max: 500,
            purchase_price: 0.0,
            ..fixtures::product()
        };
        assert_eq!(validate(&product), Ok(()));
    }

    #[test]
    fn test_every_broken_field_is_reported() {
        let product = Product {
            name: String::new(),
            brand: "b".repeat(201),
            quantity: 101,
            max: 501,
            purchase_price: -0.01,
            ..fixtures::product()
        };
        let violations = validate(&product).unwrap_err();
        let mut reported = fields(&violations);
        reported.sort();
        assert_eq!(
            reported,
            vec!["brand", "max", "name", "purchasePrice", "quantity"]
        );
        assert!(violations.to_string().contains("name: "));
    }

    #[test]
    fn test_paths_use_json_names() {
        assert_eq!(wire_name("purchase_price"), "purchasePrice");
        assert_eq!(wire_name("max"), "max");
        assert_eq!(wire_name("items[0].unit_cost"), "items[0].unitCost");
    }

    #[test]
    fn test_quantity_change_must_be_positive() {
        assert_eq!(validate(&QuantityChange { quantity: 1 }), Ok(()));

        let violations = validate(&QuantityChange { quantity: 0 }).unwrap_err();
        assert_eq!(fields(&violations), vec!["quantity"]);
    }
}
