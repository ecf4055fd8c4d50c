use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use email_checker::config::AppConfig;
use email_checker::openapi::ApiDoc;
use email_checker::{build_resolver, telemetry};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Checker Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Email validation and health endpoints under `/api/v1`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - A shared MX resolver (cache + DNS-over-HTTPS client)
///
/// # Endpoints
/// - Validation: `/api/v1/validate-email?email=...`
/// - Health: `/api/v1/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let resolver = Data::new(build_resolver(&config)?);

    tracing::info!(
        host = %config.host,
        port = config.port,
        doh_endpoint = %config.doh_endpoint,
        cache_backend = resolver.cache_backend(),
        "starting email checker"
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(resolver.clone())
            .configure(email_checker::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
