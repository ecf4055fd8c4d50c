use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Structural check of an email address.
///
/// Accepts a local part of `[A-Za-z0-9._%+-]`, an `@`, then a domain of
/// `[A-Za-z0-9.-]` containing at least one dot and ending in an alphabetic
/// top-level label of two or more characters. Says nothing about whether the
/// address exists.
///
/// # Examples
/// ```
/// use email_checker::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
