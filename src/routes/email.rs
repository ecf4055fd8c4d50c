use crate::dns::MxResolver;
use crate::error::ApiError;
use crate::models::{EmailQuery, ErrorResponse, ValidationResult};
use crate::validation::verdict;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, instrument};
use uuid::Uuid;

/// # Email Validation Endpoint
///
/// Reports three independent signals for an address:
/// 1. Structural syntax check
/// 2. Disposable-provider membership of the domain
/// 3. MX records for the domain (DNS-over-HTTPS, cached per domain)
///
/// ## Request
/// - Method: any (GET is the documented one)
/// - Query: `email` (required)
///
/// ## Responses
/// - **200 OK**: `{"email", "syntax_valid", "disposable", "mx_valid"}`
/// - **400 Bad Request**: `{"error": "Missing email parameter"}`
///
/// ## Example
/// ```text
/// GET /api/v1/validate-email?email=test@gmail.com
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/validate-email",
    params(EmailQuery),
    responses(
        (status = 200, description = "Validation verdict", body = ValidationResult),
        (status = 400, description = "Missing email parameter", body = ErrorResponse)
    ),
    tag = "Email Validation"
)]
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn validate_email(
    req: HttpRequest,
    resolver: web::Data<MxResolver>,
) -> Result<HttpResponse, ApiError> {
    let email = EmailQuery::from_query_string(req.query_string())
        .email
        .filter(|email| !email.is_empty())
        .ok_or(ApiError::MissingParameter)?;

    let result = verdict::assemble(&email, &resolver).await;
    info!(
        syntax_valid = result.syntax_valid,
        disposable = result.disposable,
        mx_valid = result.mx_valid,
        "email validated"
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Mounts the validation route. The handler answers every HTTP method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/validate-email").to(validate_email));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::dns::MockMxLookup;
    use crate::error::ResolveError;
    use actix_web::{App, test};
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    // Helper function to create a test app around a mocked DoH lookup
    async fn create_test_app(
        lookup: MockMxLookup,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let resolver = MxResolver::new(
            Arc::new(MemoryStore::new(100)),
            Arc::new(lookup),
            Duration::from_secs(3600),
        );

        test::init_service(
            App::new()
                .app_data(web::Data::new(resolver))
                .configure(configure_routes),
        )
        .await
    }

    async fn body_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn test_valid_email_with_mx() {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_has_mx_records()
            .with(eq("gmail.com"))
            .returning(|_| Ok(true));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=test@gmail.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(resp).await,
            json!({
                "email": "test@gmail.com",
                "syntax_valid": true,
                "disposable": false,
                "mx_valid": true
            })
        );
    }

    #[actix_web::test]
    async fn test_disposable_email_detection() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_has_mx_records().returning(|_| Ok(true));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=user@mailinator.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body = body_json(resp).await;
        assert_eq!(body["disposable"], true);
        assert_eq!(body["syntax_valid"], true);
        assert_eq!(body["email"], "user@mailinator.com");
    }

    #[actix_web::test]
    async fn test_missing_email_parameter() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_has_mx_records().never();
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get().uri("/validate-email").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Missing email parameter" })
        );
    }

    #[actix_web::test]
    async fn test_empty_email_parameter() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_has_mx_records().never();
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        assert_eq!(body_json(resp).await["error"], "Missing email parameter");
    }

    #[actix_web::test]
    async fn test_not_an_email() {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_has_mx_records()
            .with(eq(""))
            .times(1)
            .returning(|_| Err(ResolveError::Status(400)));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=not-an-email")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            body_json(resp).await,
            json!({
                "email": "not-an-email",
                "syntax_valid": false,
                "disposable": false,
                "mx_valid": false
            })
        );
    }

    #[actix_web::test]
    async fn test_url_encoded_email_is_echoed_decoded() {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_has_mx_records()
            .with(eq("example.com"))
            .returning(|_| Ok(true));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=first%2Blast%40example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body = body_json(resp).await;
        assert_eq!(body["email"], "first+last@example.com");
        assert_eq!(body["syntax_valid"], true);
    }

    #[actix_web::test]
    async fn test_repeated_email_parameter_uses_first_value() {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_has_mx_records()
            .with(eq("gmail.com"))
            .times(1)
            .returning(|_| Ok(true));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=a@gmail.com&email=b@gmail.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(resp).await,
            json!({
                "email": "a@gmail.com",
                "syntax_valid": true,
                "disposable": false,
                "mx_valid": true
            })
        );
    }

    #[actix_web::test]
    async fn test_unrelated_parameters_are_ignored() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_has_mx_records().returning(|_| Ok(false));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?foo=1&foo=2&email=user@mailinator.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(body_json(resp).await["disposable"], true);
    }

    #[actix_web::test]
    async fn test_repeated_parameter_without_email_is_missing() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_has_mx_records().never();
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?mail=a@gmail.com&mail=b@gmail.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Missing email parameter" })
        );
    }

    #[actix_web::test]
    async fn test_upstream_failure_reports_false() {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_has_mx_records()
            .returning(|_| Err(ResolveError::Timeout));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::get()
            .uri("/validate-email?email=test@gmail.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body = body_json(resp).await;
        assert_eq!(body["mx_valid"], false);
        assert_eq!(body["syntax_valid"], true);
    }

    #[actix_web::test]
    async fn test_domain_lookup_is_cached_across_requests() {
        let mut lookup = MockMxLookup::new();
        lookup
            .expect_has_mx_records()
            .with(eq("example.com"))
            .times(1)
            .returning(|_| Ok(true));
        let app = create_test_app(lookup).await;

        for uri in [
            "/validate-email?email=test@example.com",
            "/validate-email?email=different-user@example.com",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(body_json(resp).await["mx_valid"], true);
        }
    }

    #[actix_web::test]
    async fn test_other_methods_are_accepted() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_has_mx_records().returning(|_| Ok(true));
        let app = create_test_app(lookup).await;

        let req = test::TestRequest::post()
            .uri("/validate-email?email=test@gmail.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(body_json(resp).await["mx_valid"], true);
    }
}
