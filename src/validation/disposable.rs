use phf::phf_set;

/// Throwaway-mailbox providers. Matching is exact and case-sensitive.
static DISPOSABLE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "mailinator.com",
    "tempmail.com",
    "yopmail.com",
    "10minutemail.com",
    "guerrillamail.com",
    "throwawaymail.com",
    "maildrop.cc",
    "dispostable.com",
    "fakeinbox.com",
    "getnada.com",
    "mailsac.com",
    "trashmail.com",
    "jetable.org",
    "mailcatch.com",
    "tmpmail.net",
    "disposablemail.com",
    "instantemailaddress.com",
    "spamgourmet.com",
    "trashmail.io",
    "spambox.us",
    "sneakemail.com",
    "spambox.com",
    "mailnesia.com",
    "discard.email",
};

/// Returns `true` when `domain` belongs to a known disposable-email provider.
///
/// Takes the already extracted domain, not the full address.
///
/// # Example
/// ```
/// use email_checker::validation::disposable::is_disposable_domain;
///
/// assert!(is_disposable_domain("mailinator.com"));
/// assert!(!is_disposable_domain("gmail.com"));
/// ```
pub fn is_disposable_domain(domain: &str) -> bool {
    DISPOSABLE_DOMAINS.contains(domain)
}
