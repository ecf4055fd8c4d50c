use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of the validation endpoint.
///
/// `email` stays optional here so that an absent parameter reaches the
/// handler and is reported with the service's own error body instead of
/// actix's default extractor error.
#[derive(Deserialize, Debug, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Address to check, URL-encoded
    #[param(required = true)]
    pub email: Option<String>,
}

impl EmailQuery {
    /// Reads `email` from a raw query string. The first occurrence wins and
    /// other keys are ignored, so repeated or unknown parameters never turn
    /// into a parse error.
    pub fn from_query_string(query: &str) -> Self {
        let email = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.into_owned());
        Self { email }
    }
}

/// Verdict for one address. Every field is computed independently; an
/// invalid syntax does not stop the disposable or MX checks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ValidationResult {
    /// The address exactly as received
    pub email: String,
    pub syntax_valid: bool,
    pub disposable: bool,
    /// Whether the domain publishes at least one MX record
    pub mx_valid: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
