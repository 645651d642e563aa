//! Phone and email syntax rules.
//!
//! Both predicates are pure: they inspect the input and return a boolean.
//! The email normalization (canonical `"NA"`, truncation after the first
//! `.com`) is folded into [`normalize_email`] so callers get the stored form
//! and the verdict in one step.

/// Sentinel for "no email address", stored canonically in upper case.
pub const EMAIL_NONE: &str = "NA";

/// Accepted domain fragments. Matching is a plain substring test anywhere in
/// the part after `@`, so a domain like `xgmail.comx` passes too.
pub const ALLOWED_DOMAINS: [&str; 3] = ["gmail.com", "yahoo.com", "email.com"];

/// True iff `phone` is exactly 10 ASCII digits. No `+`, spaces, or dashes.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// True iff `email` is the `"NA"` sentinel (any case) or a plausible address
/// on one of the allowed domains.
pub fn is_valid_email(email: &str) -> bool {
    if email.eq_ignore_ascii_case(EMAIL_NONE) {
        return true;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    // '@' must be neither the first nor the last character
    if at == 0 || at + 1 == email.len() {
        return false;
    }
    let domain = &email[at + 1..];
    ALLOWED_DOMAINS.iter().any(|d| domain.contains(d))
}

/// Normalize-and-validate in one step.
///
/// Validity is judged on the raw input. The normalized form is the canonical
/// `"NA"` for any-case `na`, otherwise the input truncated immediately after
/// the first `.com` occurrence when the string does not already end there.
pub fn normalize_email(email: &str) -> (String, bool) {
    let valid = is_valid_email(email);
    if email.eq_ignore_ascii_case(EMAIL_NONE) {
        return (EMAIL_NONE.to_string(), valid);
    }
    let normalized = match email.find(".com") {
        Some(pos) if pos + 4 < email.len() => email[..pos + 4].to_string(),
        _ => email.to_string(),
    };
    (normalized, valid)
}
