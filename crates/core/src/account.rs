//! Account field validation helpers.
//!
//! Used by registration and profile updates in the API layer.

/// Upper bound on stored email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Canonical form for an email address: trimmed and lowercased.
///
/// Applied before every store or lookup so that registration and login agree
/// on what counts as the same address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Validate the shape of an email address.
///
/// Deliberately loose: one `@`, a non-empty local part, and a dotted domain.
/// Deliverability is the mail system's problem, not ours.
pub fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || format!("Invalid email address '{email}'");

    if email.is_empty()
        || email.len() > MAX_EMAIL_LENGTH
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("j.doe+test@sub.example.co").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(validate_email("janeexample.com").is_err());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jane@").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn rejects_double_at_sign() {
        assert!(validate_email("jane@doe@example.com").is_err());
    }

    #[test]
    fn rejects_undotted_or_misdotted_domain() {
        assert!(validate_email("jane@localhost").is_err());
        assert!(validate_email("jane@.example.com").is_err());
        assert!(validate_email("jane@example.com.").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(validate_email("jane doe@example.com").is_err());
        assert!(validate_email(" jane@example.com").is_err());
    }

    #[test]
    fn rejects_overlong_address() {
        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
    }
}
