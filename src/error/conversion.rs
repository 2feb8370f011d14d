/**
 * Error Conversion
 *
 * This module converts service errors into HTTP responses.
 *
 * # Response Format
 *
 * Field-level errors are rendered as the bare field map, matching the API
 * contract for validation and credential failures:
 *
 * ```json
 * {"email": "Email is already registered"}
 * ```
 *
 * All other errors use a generic error body:
 *
 * ```json
 * {"error": "Database not configured", "status": 503}
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Fields { fields, .. } => serde_json::json!(fields),
            _ => serde_json::json!({
                "error": self.message(),
                "status": status.as_u16(),
            }),
        };

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_field_error_renders_bare_map() {
        let error = ApiError::field(StatusCode::BAD_REQUEST, "password", "Incorrect password");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_handler_error_renders_error_body() {
        let error = ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
