use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /api/v1/health`, see [`health::health`].
pub mod health;

/// # Email Validation Endpoint
///
/// `/api/v1/validate-email?email=...`, see [`email::validate_email`].
pub mod email;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api/v1` base path.
///
/// ```text
/// GET /api/v1/health                       - Service health status
/// GET /api/v1/validate-email?email=<addr>  - Email validation verdict
/// ```
///
/// The handlers expect a `web::Data<MxResolver>` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes),
    );
}
