use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::error::AppError;
use crate::modules::markets::models::{Market, MarketPayload};
use crate::modules::markets::services::MarketService;

/// Confirmation body for update responses
#[derive(Debug, Serialize)]
pub struct UpdateConfirmation {
    pub message: String,
    pub mercado: Market,
}

/// Confirmation body for delete responses
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

// The id segment is taken as a raw string so a non-numeric id maps to 400,
// not to actix's default 404 for a failed path extraction.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Market id must be numeric, got '{}'", raw)))
}

/// List all markets
/// GET /mercado
pub async fn list_markets(service: web::Data<Arc<MarketService>>) -> HttpResponse {
    let markets = service.list_markets().await;
    HttpResponse::Ok().json(markets)
}

/// Create a new market
/// POST /mercado
pub async fn create_market(
    service: web::Data<Arc<MarketService>>,
    payload: web::Json<MarketPayload>,
) -> Result<HttpResponse, AppError> {
    let market = service.create_market(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(market))
}

/// Get market by id
/// GET /mercado/{id}
pub async fn get_market(
    service: web::Data<Arc<MarketService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let market = service.get_market(id).await?;
    Ok(HttpResponse::Ok().json(market))
}

/// Update market by id
/// PUT /mercado/{id}
pub async fn update_market(
    service: web::Data<Arc<MarketService>>,
    path: web::Path<String>,
    payload: web::Json<MarketPayload>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let market = service.update_market(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpdateConfirmation {
        message: format!("Market {} updated successfully", market.id),
        mercado: market,
    }))
}

/// Delete market by id
/// DELETE /mercado/{id}
pub async fn delete_market(
    service: web::Data<Arc<MarketService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    service.delete_market(id).await?;
    Ok(HttpResponse::Ok().json(DeleteConfirmation {
        message: format!("Market {} deleted successfully", id),
    }))
}

/// Fallback for an unsupported method on a known path: 405, JSON body
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "error": {
            "message": "Method not allowed on this resource",
            "code": 405,
        }
    }))
}

/// App-level fallback for paths matching no route: 404, JSON body
pub async fn unknown_route() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": {
            "message": "Route not found",
            "code": 404,
        }
    }))
}

/// Configure market routes.
///
/// Resources are declared per path so an unsupported method on a known path
/// answers 405, while paths outside the patterns fall through to the
/// app-level 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mercado")
            .service(
                web::resource("")
                    .route(web::get().to(list_markets))
                    .route(web::post().to(create_market))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_market))
                    .route(web::put().to(update_market))
                    .route(web::delete().to(delete_market))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .default_service(web::route().to(unknown_route)),
    );
}
