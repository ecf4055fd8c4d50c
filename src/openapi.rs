use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served at `/api-docs/openapi.json`, with Swagger UI at
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `GET /api/v1/validate-email?email=...`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::ValidationResult,
            crate::models::email::ErrorResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Syntax, disposable-domain and MX checks for an address")
    ),
    info(
        description = "Plausibility checks for email addresses without contacting the mailbox",
        title = "Email Checker API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
