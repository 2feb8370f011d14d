/**
 * Service Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each
 * variant carries enough context to produce an HTTP response.
 *
 * # Error Categories
 *
 * - `Fields` - Validation and credential errors, rendered as a JSON map of
 *   field name to message with the carried status code (400 or 404)
 * - `Handler` - General handler errors with an explicit status code
 * - `Database`, `Hash`, `Token` - Infrastructure failures, rendered as 500
 */

use std::collections::BTreeMap;

use axum::http::StatusCode;
use thiserror::Error;

/// Map of input field name to human-readable message
pub type FieldErrors = BTreeMap<String, String>;

/// Errors produced by the API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level error, e.g. a validation failure or a credential error
    ///
    /// Rendered as a flat JSON object whose keys are field names.
    #[error("field errors: {fields:?}")]
    Fields {
        /// HTTP status code for this error
        status: StatusCode,
        /// Field name to message map
        fields: FieldErrors,
    },

    /// Handler error with an explicit status code
    #[error("handler error: {message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a field-level error for a single field
    pub fn field(status: StatusCode, name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(name.into(), message.into());
        Self::Fields { status, fields }
    }

    /// Create a field-level error from a prepared field map
    pub fn fields(status: StatusCode, fields: FieldErrors) -> Self {
        Self::Fields { status, fields }
    }

    /// Create a handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Fields` and `Handler` carry their own status
    /// - `Database`, `Hash`, `Token` map to 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Fields { status, .. } => *status,
            Self::Handler { status, .. } => *status,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a human-readable error message
    pub fn message(&self) -> String {
        match self {
            Self::Fields { fields, .. } => fields
                .iter()
                .map(|(field, message)| format!("{}: {}", field, message))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Handler { message, .. } => message.clone(),
            Self::Database(err) => err.to_string(),
            Self::Hash(err) => err.to_string(),
            Self::Token(err) => err.to_string(),
        }
    }
}
