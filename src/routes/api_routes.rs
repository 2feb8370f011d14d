/**
 * API Route Configuration
 *
 * This module wires the user endpoints into the router.
 *
 * # Routes
 *
 * - `GET /api/users/test` - Public probe
 * - `POST /api/users/register` - User registration (public)
 * - `POST /api/users/login` - User login (public)
 * - `GET /api/users/current` - Authenticated identity
 *
 * # Authentication
 *
 * Only `/api/users/current` is protected: it carries the bearer-token
 * middleware as a route layer, so unauthenticated requests are rejected
 * with 401 before the handler runs.
 */

use axum::Router;

use crate::auth::handlers::{current_user, login, register, users_test};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure the user API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, cloned into the auth middleware
///
/// # Returns
///
/// Router with the user routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        .route("/api/users/test", axum::routing::get(users_test))
        .route("/api/users/register", axum::routing::post(register))
        .route("/api/users/login", axum::routing::post(login))
        .route(
            "/api/users/current",
            axum::routing::get(current_user).route_layer(axum::middleware::from_fn_with_state(
                app_state.clone(),
                auth_middleware,
            )),
        )
}
