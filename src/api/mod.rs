//! HTTP transport for the stock service.
//!
//! Translates requests into validated records, delegates to the
//! [`StockService`](crate::stock::StockService) and maps each outcome onto a status code:
//!
//! | outcome | status |
//! |---|---|
//! | created | 201 |
//! | found, listed, adjusted | 200 |
//! | deleted | 204 |
//! | `NotFound` | 404 |
//! | `AlreadyExists`, `StockExceeded`, `StockInsufficient`, `ValidationFailed` | 400 |
//! | store unavailable | 500 |

pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;

use actix_web::web;

/// Base path of the product resource.
pub const PRODUCTS_PATH: &str = "/api/v1/products";

/// Where the OpenAPI document is served.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Register every route. The caller supplies `web::Data<StockService>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(handlers::healthz))
        .route(OPENAPI_PATH, web::get().to(handlers::openapi_json))
        .service(
        web::scope(PRODUCTS_PATH)
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .route("", web::post().to(handlers::create_product))
            .route("", web::get().to(handlers::list_products))
            .route("/{name}", web::get().to(handlers::find_by_name))
            .route("/{serial}", web::delete().to(handlers::delete_product))
            .route("/{serial}/increment", web::patch().to(handlers::increment))
            .route("/{serial}/decrement", web::patch().to(handlers::decrement)),
    );
}
