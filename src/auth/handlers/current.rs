/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/users/current, which
 * echoes the identity of the authenticated caller.
 *
 * # Authentication
 *
 * The route is protected by the bearer-token middleware, which verifies
 * the token, loads the principal from the store, and attaches it to the
 * request. This handler only reads the attached principal.
 */

use axum::response::Json;

use crate::auth::handlers::types::CurrentUserResponse;
use crate::middleware::auth::AuthUser;

/// Current-user handler
///
/// Returns the id, name, and email of the verified principal. The
/// middleware rejects the request with 401 before this handler runs when
/// the token is absent, malformed, expired, or refers to a deleted user.
pub async fn current_user(AuthUser(user): AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: user.user_id.to_string(),
        name: user.name,
        email: user.email,
    })
}
