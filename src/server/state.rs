/**
 * Application State Management
 *
 * This module defines the shared state handed to every request handler.
 *
 * # Thread Safety
 *
 * The state is cheap to clone: the connection pool is internally reference
 * counted, and there is no other shared mutable state across requests.
 * Optional services that fail to initialize are held as `None` so the
 * server can start without them.
 */

use sqlx::PgPool;

/// Central state container for the application
///
/// Holds the optional PostgreSQL connection pool. Handlers that need the
/// store return `503 Service Unavailable` when the pool is absent.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when the store is not configured
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Create application state around an optional database pool
    pub fn new(db_pool: Option<PgPool>) -> Self {
        Self { db_pool }
    }
}
