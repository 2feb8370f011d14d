/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Validate the input shape (email, password)
 * 2. Look up the user by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Sign a one-hour bearer token embedding id, name, and avatar
 *
 * # Responses
 *
 * An unknown email returns 404 and a password mismatch returns 400, each
 * with a field-to-message body naming the offending field.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::validate_login;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state with the database pool
/// * `Json(request)` - Login request with email and password
///
/// # Errors
///
/// * `400 Bad Request` - Input shape invalid, or password incorrect
/// * `404 Not Found` - No account registered with the email
/// * `503 Service Unavailable` - Store not configured
/// * `500 Internal Server Error` - Store, hash comparison, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    if let Err(fields) = validate_login(&request) {
        tracing::warn!("Login validation failed for: {}", request.email);
        return Err(ApiError::fields(StatusCode::BAD_REQUEST, fields));
    }

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let user = get_user_by_email(pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Unknown email: {}", request.email);
            ApiError::field(
                StatusCode::NOT_FOUND,
                "email",
                "Email is not registered with any account",
            )
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::from(e)
    })?;

    if !valid {
        tracing::warn!("Incorrect password for: {}", request.email);
        return Err(ApiError::field(
            StatusCode::BAD_REQUEST,
            "password",
            "Incorrect password",
        ));
    }

    let token = create_token(user.id, user.name.clone(), user.avatar.clone()).map_err(|e| {
        tracing::error!("Failed to sign token: {:?}", e);
        ApiError::from(e)
    })?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    Ok(Json(LoginResponse {
        success: true,
        token: format!("Bearer {}", token),
    }))
}
