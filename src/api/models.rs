//! Response bodies that are not domain records.

use crate::model::Violations;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `not_found`
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationBody>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ViolationBody {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            violations: Vec::new(),
        }
    }

    pub fn with_violations(mut self, violations: &Violations) -> Self {
        self.violations = violations
            .iter()
            .map(|v| ViolationBody {
                field: v.field.clone(),
                message: v.message.clone(),
            })
            .collect();
        self
    }
}

/// Body of `GET /healthz`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok_with_version(version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            version: version.to_string(),
        }
    }
}
