/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require a
 * verified identity. It extracts and verifies the bearer token from the
 * Authorization header, loads the principal from the store, and attaches
 * it to the request for handlers to read.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::auth::users::get_user_by_id;
use crate::server::state::AppState;

/// Principal extracted from a verified bearer token
///
/// `name` and `email` come from the store, not the token, so the response
/// of the identity endpoint reflects the current record.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies the signature and expiry
/// 3. Loads the principal from the store by the token's subject id
/// 4. Attaches the principal to request extensions
///
/// Returns 401 when the token is missing, malformed, expired, or refers
/// to a user that no longer exists; 503 when the store is not configured.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            StatusCode::UNAUTHORIZED
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        StatusCode::UNAUTHORIZED
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        StatusCode::UNAUTHORIZED
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user ID in token: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let user = get_user_by_id(pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            tracing::warn!("Token subject not found: {}", user_id);
            StatusCode::UNAUTHORIZED
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        name: user.name,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated principal
///
/// Used as a handler parameter on routes behind `auth_middleware`.
/// Rejects with 401 when the middleware did not attach a principal.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    fn principal() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_principal() {
        let user = principal();
        let mut request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        request.extensions_mut().insert(user.clone());

        let (mut parts, _) = request.into_parts();
        let extracted = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.0.user_id, user.user_id);
        assert_eq!(extracted.0.email, user.email);
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_principal_missing() {
        let request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        let (mut parts, _) = request.into_parts();
        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
