/**
 * Registration Input Validation
 *
 * Validates the shape of a registration request. Every failing field is
 * reported, so a request with several problems gets one message per field.
 *
 * # Rules
 *
 * - `name` is required and must be 2 to 30 characters
 * - `email` is required and must look like an email address
 * - `password` is required and must be 6 to 30 characters
 */

use crate::auth::handlers::types::RegisterRequest;
use crate::error::types::FieldErrors;
use crate::validation::is_valid_email;

/// Validate a registration request
///
/// # Returns
///
/// `Ok(())` when the input is well formed, otherwise the field error map.
pub fn validate_register(request: &RegisterRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = request.name.trim();
    if name.is_empty() {
        errors.insert("name".to_string(), "Name field is required".to_string());
    } else if name.chars().count() < 2 || name.chars().count() > 30 {
        errors.insert(
            "name".to_string(),
            "Name must be between 2 and 30 characters".to_string(),
        );
    }

    let email = request.email.trim();
    if email.is_empty() {
        errors.insert("email".to_string(), "Email field is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email".to_string(), "Email is invalid".to_string());
    }

    if request.password.is_empty() {
        errors.insert("password".to_string(), "Password field is required".to_string());
    } else if request.password.len() < 6 || request.password.len() > 30 {
        errors.insert(
            "password".to_string(),
            "Password must be between 6 and 30 characters".to_string(),
        );
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

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_register(&valid_request()).is_ok());
    }

    #[test]
    fn test_empty_name_is_required() {
        let mut request = valid_request();
        request.name = "  ".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Name field is required"));
    }

    #[test]
    fn test_name_length_bounds() {
        let mut request = valid_request();
        request.name = "J".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.get("name").unwrap().contains("between 2 and 30"));

        request.name = "x".repeat(31);
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is invalid"));
    }

    #[test]
    fn test_password_length_bounds() {
        let mut request = valid_request();
        request.password = "short".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.get("password").unwrap().contains("between 6 and 30"));

        request.password = String::new();
        let errors = validate_register(&request).unwrap_err();
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password field is required")
        );
    }

    #[test]
    fn test_all_failing_fields_are_reported() {
        let request = RegisterRequest {
            name: String::new(),
            email: String::new(),
            password: String::new(),
        };
        let errors = validate_register(&request).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
