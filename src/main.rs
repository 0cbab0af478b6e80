use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mercado_verify::config::Config;
use mercado_verify::middleware::{RateLimiter, RequestId};
use mercado_verify::modules::health;
use mercado_verify::modules::markets::controllers::market_controller;
use mercado_verify::modules::markets::repositories::InMemoryMarketRepository;
use mercado_verify::modules::markets::services::MarketService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mercado_verify=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting mercado reference server");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        "Rate limit: {}/min, burst {}",
        config.server.rate_limit_per_minute,
        config.server.rate_limit_burst
    );

    let service = Arc::new(MarketService::new(Arc::new(
        InMemoryMarketRepository::new(),
    )));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    // One limiter shared across workers; clones share its state
    let rate_limiter = RateLimiter::new(
        config.server.rate_limit_per_minute,
        config.server.rate_limit_burst,
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(rate_limiter.clone())
            .wrap(RequestId)
            .app_data(web::Data::new(service.clone()))
            .route("/", web::get().to(index))
            .configure(health::controllers::configure)
            .configure(market_controller::configure)
            .default_service(web::route().to(market_controller::unknown_route))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "mercado reference server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
