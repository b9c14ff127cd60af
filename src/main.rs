//! # Product Stock Service
//!
//! Entry point: reads the [`ServerConfig`], starts the [`StockSystem`] and serves the
//! product API over HTTP until interrupted.

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use product_stock::api::configure_routes;
use product_stock::config::ServerConfig;
use product_stock::lifecycle::{setup_tracing, StockSystem};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    setup_tracing(&config.log_filter);

    info!(host = %config.host, port = config.port, workers = config.workers, "Starting product stock service");

    let system = StockSystem::new(config.store_buffer);
    let service = web::Data::new(system.service.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(configure_routes)
    })
    .workers(config.workers)
    .bind(config.bind_address())
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Service stopped");
    Ok(())
}
