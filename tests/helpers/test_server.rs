// Test Server Helpers
//
// Spawns the reference mercado server on a random port using actix-test.
// Each call gets a fresh in-memory store, so suites never share state.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App};

pub use actix_test::TestServer;

use mercado_verify::middleware::{RateLimiter, RequestId};
use mercado_verify::modules::health;
use mercado_verify::modules::markets::controllers::market_controller;
use mercado_verify::modules::markets::repositories::InMemoryMarketRepository;
use mercado_verify::modules::markets::services::MarketService;
use mercado_verify::MercadoClient;

/// Per-request time budget the suites run with
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(5);

fn fresh_service() -> Arc<MarketService> {
    Arc::new(MarketService::new(Arc::new(
        InMemoryMarketRepository::new(),
    )))
}

/// Spawn the reference server without rate limiting.
///
/// Server stops automatically when the returned TestServer drops.
pub async fn spawn_test_server() -> TestServer {
    let service = fresh_service();

    actix_test::start(move || {
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(service.clone()))
            .configure(health::controllers::configure)
            .configure(market_controller::configure)
            .default_service(web::route().to(market_controller::unknown_route))
    })
}

/// Spawn the reference server with the governor rate limiter in front.
///
/// `per_minute` is the sustained quota, `burst` the capacity before 429s
/// start. All requests share one limiter, as in production wiring.
pub async fn spawn_rate_limited_server(per_minute: u32, burst: u32) -> TestServer {
    let service = fresh_service();
    let limiter = RateLimiter::new(per_minute, burst);

    actix_test::start(move || {
        App::new()
            .wrap(limiter.clone())
            .wrap(RequestId)
            .app_data(web::Data::new(service.clone()))
            .configure(health::controllers::configure)
            .configure(market_controller::configure)
            .default_service(web::route().to(market_controller::unknown_route))
    })
}

/// Verifier client bound to a spawned server, with the default budget
pub fn verifier(srv: &TestServer) -> MercadoClient {
    MercadoClient::new(srv.url(""), DEFAULT_BUDGET).expect("Failed to build verifier client")
}

/// Verifier client with a custom time budget (timeout simulation)
pub fn verifier_with_budget(srv: &TestServer, budget: Duration) -> MercadoClient {
    MercadoClient::new(srv.url(""), budget).expect("Failed to build verifier client")
}
