/// Returns everything after the last `@` of `email`, or `""` when there is
/// no `@` at all.
///
/// The result is not checked for being a well-formed domain name.
///
/// ```
/// use email_checker::validation::domain::extract_domain;
///
/// assert_eq!(extract_domain("test@gmail.com"), "gmail.com");
/// assert_eq!(extract_domain("a@b@c.com"), "c.com");
/// assert_eq!(extract_domain("not-an-email"), "");
/// ```
pub fn extract_domain(email: &str) -> &str {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => "",
    }
}
