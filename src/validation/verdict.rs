use super::{disposable::is_disposable_domain, domain::extract_domain, syntax::is_valid_email};
use crate::dns::MxResolver;
use crate::models::ValidationResult;
use tracing::debug;

/// Runs all three checks on `email` and merges them.
///
/// Nothing short-circuits: a syntactically invalid address still has its
/// domain looked up, so callers always receive a complete record.
pub async fn assemble(email: &str, resolver: &MxResolver) -> ValidationResult {
    let syntax_valid = is_valid_email(email);
    let domain = extract_domain(email);
    let disposable = is_disposable_domain(domain);
    let mx_valid = resolver.resolve_mx(domain).await;

    debug!(domain, syntax_valid, disposable, mx_valid, "verdict assembled");

    ValidationResult {
        email: email.to_string(),
        syntax_valid,
        disposable,
        mx_valid,
    }
}
