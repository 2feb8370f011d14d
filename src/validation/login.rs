/**
 * Login Input Validation
 *
 * Validates the shape of a login request.
 *
 * # Rules
 *
 * - `email` is required and must look like an email address
 * - `password` is required
 */

use crate::auth::handlers::types::LoginRequest;
use crate::error::types::FieldErrors;
use crate::validation::is_valid_email;

/// Validate a login request
///
/// # Returns
///
/// `Ok(())` when the input is well formed, otherwise the field error map.
pub fn validate_login(request: &LoginRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = request.email.trim();
    if email.is_empty() {
        errors.insert("email".to_string(), "Email field is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email".to_string(), "Email is invalid".to_string());
    }

    if request.password.is_empty() {
        errors.insert("password".to_string(), "Password field is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = LoginRequest {
            email: "jane@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(validate_login(&request).is_ok());
    }

    #[test]
    fn test_missing_email() {
        let request = LoginRequest {
            email: String::new(),
            password: "hunter22".to_string(),
        };
        let errors = validate_login(&request).unwrap_err();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email field is required"));
    }

    #[test]
    fn test_invalid_email() {
        let request = LoginRequest {
            email: "nope".to_string(),
            password: "hunter22".to_string(),
        };
        let errors = validate_login(&request).unwrap_err();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is invalid"));
    }

    #[test]
    fn test_missing_password() {
        let request = LoginRequest {
            email: "jane@example.com".to_string(),
            password: String::new(),
        };
        let errors = validate_login(&request).unwrap_err();
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password field is required")
        );
    }
}
