/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database)
 * 2. Create the shared application state
 * 3. Create and configure the router
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// The function is designed to be resilient: a missing or unreachable
/// database does not prevent startup. Store-backed endpoints return
/// `503 Service Unavailable` until a database is configured.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing DevLink backend server");

    let db_pool = load_database().await;

    let app_state = AppState::new(db_pool);

    create_router(app_state)
}
