//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - User API endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /api/users/test` - Public probe
//! - `POST /api/users/register` - User registration
//! - `POST /api/users/login` - User login
//! - `GET /api/users/current` - Authenticated identity (bearer token)
//!
//! Unknown routes fall through to a 404 handler.

/// Main router creation
pub mod router;

/// User API endpoints
pub mod api_routes;

// Re-export commonly used types
pub use router::create_router;
