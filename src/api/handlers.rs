//! Product handlers
//!
//! Each handler decodes and validates the request, calls the [`StockService`] once and
//! turns the outcome into a response. Errors are rendered by the `ResponseError` impl
//! on [`ProductError`].

use super::docs::ApiDoc;
use super::models::{ErrorResponse, HealthResponse};
use crate::model::{validate, Product, QuantityChange, Serial};
use crate::stock::{ProductError, StockService};
use actix_web::{web, HttpResponse, Responder};
use tracing::debug;
use utoipa::OpenApi;

/// POST /api/v1/products
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Duplicate name or invalid fields", body = ErrorResponse)
    )
)]
pub async fn create_product(
    service: web::Data<StockService>,
    body: web::Json<Product>,
) -> Result<HttpResponse, ProductError> {
    let product = body.into_inner();
    debug!(?product, "create_product called");
    validate(&product)?;
    let created = service.create(product).await?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/v1/products/{name}
#[utoipa::path(
    get,
    path = "/api/v1/products/{name}",
    tag = "products",
    params(("name" = String, Path, description = "Product name")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this name", body = ErrorResponse)
    )
)]
pub async fn find_by_name(
    service: web::Data<StockService>,
    name: web::Path<String>,
) -> Result<HttpResponse, ProductError> {
    let product = service.find_by_name(&name).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// GET /api/v1/products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses((status = 200, description = "Every product, ordered by serial", body = [Product]))
)]
pub async fn list_products(service: web::Data<StockService>) -> Result<HttpResponse, ProductError> {
    let products = service.list_all().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// DELETE /api/v1/products/{serial}
#[utoipa::path(
    delete,
    path = "/api/v1/products/{serial}",
    tag = "products",
    params(("serial" = u64, Path, description = "Product serial")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this serial", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    service: web::Data<StockService>,
    serial: web::Path<u64>,
) -> Result<HttpResponse, ProductError> {
    service.delete_by_serial(Serial(serial.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /api/v1/products/{serial}/increment
#[utoipa::path(
    patch,
    path = "/api/v1/products/{serial}/increment",
    tag = "products",
    params(("serial" = u64, Path, description = "Product serial")),
    request_body = QuantityChange,
    responses(
        (status = 200, description = "Stock incremented", body = Product),
        (status = 400, description = "Max stock capacity exceeded or invalid quantity", body = ErrorResponse),
        (status = 404, description = "No product with this serial", body = ErrorResponse)
    )
)]
pub async fn increment(
    service: web::Data<StockService>,
    serial: web::Path<u64>,
    body: web::Json<QuantityChange>,
) -> Result<HttpResponse, ProductError> {
    validate(&*body)?;
    let product = service
        .increment(Serial(serial.into_inner()), body.quantity)
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

/// PATCH /api/v1/products/{serial}/decrement
#[utoipa::path(
    patch,
    path = "/api/v1/products/{serial}/decrement",
    tag = "products",
    params(("serial" = u64, Path, description = "Product serial")),
    request_body = QuantityChange,
    responses(
        (status = 200, description = "Stock decremented", body = Product),
        (status = 400, description = "Not enough stock or invalid quantity", body = ErrorResponse),
        (status = 404, description = "No product with this serial", body = ErrorResponse)
    )
)]
pub async fn decrement(
    service: web::Data<StockService>,
    serial: web::Path<u64>,
    body: web::Json<QuantityChange>,
) -> Result<HttpResponse, ProductError> {
    validate(&*body)?;
    let product = service
        .decrement(Serial(serial.into_inner()), body.quantity)
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

/// GET /healthz - liveness probe, no storage access
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok_with_version(env!("CARGO_PKG_VERSION")))
}

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
