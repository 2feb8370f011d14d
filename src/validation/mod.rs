//! Input Validation Module
//!
//! This module validates request shapes for the authentication endpoints
//! before any store access happens. Failures are reported as a map of
//! field name to human-readable message, which handlers return verbatim
//! as a `400 Bad Request` body.
//!
//! # Module Structure
//!
//! ```text
//! validation/
//! ├── mod.rs      - Shared helpers and exports
//! ├── register.rs - Registration input validation
//! └── login.rs    - Login input validation
//! ```

/// Registration input validation
pub mod register;

/// Login input validation
pub mod login;

pub use login::validate_login;
pub use register::validate_register;

/// Check whether a string looks like an email address
///
/// This is shape validation, not deliverability checking: the address must
/// have a non-empty local part, exactly one `@`, and a domain containing a
/// dot.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
