//! Maps [`ProductError`] onto HTTP responses.

use super::models::ErrorResponse;
use crate::model::{Violation, Violations};
use crate::stock::ProductError;
use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};

impl ProductError {
    /// Stable code sent in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ProductError::AlreadyExists { .. } => "already_exists",
            ProductError::NotFound(_) => "not_found",
            ProductError::StockExceeded { .. } => "stock_exceeded",
            ProductError::StockInsufficient { .. } => "stock_insufficient",
            ProductError::ValidationFailed(_) => "validation_failed",
            ProductError::Storage(_) => "storage_unavailable",
        }
    }
}

impl ResponseError for ProductError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProductError::AlreadyExists { .. }
            | ProductError::StockExceeded { .. }
            | ProductError::StockInsufficient { .. }
            | ProductError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse::new(self.code(), self.to_string());
        let body = match self {
            ProductError::ValidationFailed(violations) => body.with_violations(violations),
            _ => body,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Turns an undecodable JSON body into a `ValidationFailed` response.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let violations = Violations(vec![Violation::new("body", err.to_string())]);
    ProductError::ValidationFailed(violations).into()
}
