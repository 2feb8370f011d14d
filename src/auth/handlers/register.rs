/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Validate the input shape (name, email, password)
 * 2. Check that no user exists with the email
 * 3. Derive the avatar URL from the email
 * 4. Hash the password with bcrypt
 * 5. Persist the record and return it
 *
 * # Responses
 *
 * The stored record is echoed back verbatim on success, hash column
 * included. Validation failures and a taken email return a 400 field map.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::gravatar::avatar_url;
use crate::auth::users::{create_user, get_user_by_email, User};
use crate::auth::handlers::types::RegisterRequest;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::validate_register;

/// Bcrypt cost factor for stored credentials
const BCRYPT_COST: u32 = 10;

/// Register handler
///
/// # Arguments
///
/// * `State(state)` - Application state with the database pool
/// * `Json(request)` - Registration request with name, email, and password
///
/// # Errors
///
/// * `400 Bad Request` - Input shape invalid, or email already registered;
///   body is a field-to-message map
/// * `503 Service Unavailable` - Store not configured
/// * `500 Internal Server Error` - Store, hashing, or serialization failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<User>, ApiError> {
    tracing::info!("Register request for email: {}", request.email);

    if let Err(fields) = validate_register(&request) {
        tracing::warn!("Register validation failed for: {}", request.email);
        return Err(ApiError::fields(StatusCode::BAD_REQUEST, fields));
    }

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let existing = get_user_by_email(pool, &request.email).await.map_err(|e| {
        tracing::error!("Database error while checking email: {:?}", e);
        ApiError::from(e)
    })?;

    if existing.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::field(
            StatusCode::BAD_REQUEST,
            "email",
            "Email is already registered",
        ));
    }

    let avatar = avatar_url(&request.email);

    let password_hash = bcrypt::hash(&request.password, BCRYPT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::from(e)
    })?;

    let user = create_user(pool, request.name, request.email, password_hash, avatar)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            ApiError::from(e)
        })?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok(Json(user))
}
