use crate::dns::MxResolver;
use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the service status, a timestamp and the cache backend in use.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "cache_backend": "memory"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(resolver: web::Data<MxResolver>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(resolver.cache_backend()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
