/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route configuration, tracing layer, and fallback handler into a
 * single Axum router.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared with handlers and middleware
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // User API routes, including the bearer-protected identity endpoint
    let router = configure_api_routes(router, &app_state);

    // Request/response tracing
    let router = router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
