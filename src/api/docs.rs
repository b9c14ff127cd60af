//! OpenAPI description of the HTTP surface, served at [`OPENAPI_PATH`](super::OPENAPI_PATH).

use super::handlers;
use super::models::{ErrorResponse, HealthResponse, ViolationBody};
use crate::model::{Product, ProductType, QuantityChange};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Stock API", description = "Stock levels per product"),
    paths(
        handlers::create_product,
        handlers::find_by_name,
        handlers::list_products,
        handlers::delete_product,
        handlers::increment,
        handlers::decrement,
        handlers::healthz
    ),
    components(schemas(
        Product,
        ProductType,
        QuantityChange,
        ErrorResponse,
        ViolationBody,
        HealthResponse
    )),
    tags(
        (name = "products", description = "Manage products and their stock"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
