//! DevLink Backend
//!
//! This crate implements the user-facing authentication API for the DevLink
//! application: registration, login, and bearer-token session identification
//! over HTTP.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Application state, configuration loading, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User store operations, JWT tokens, avatar derivation, handlers
//! - **`validation`** - Input-shape validation producing field error maps
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - Service error types and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs          - Module exports and documentation
//! ├── main.rs         - Server entry point
//! ├── server/         - State, configuration, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, sessions, gravatar, handlers
//! ├── validation/     - Register and login input validation
//! ├── middleware/     - Request authentication
//! └── error/          - Error types
//! ```
//!
//! # Request Pipeline
//!
//! Each endpoint is a single linear pipeline: router, input validation,
//! store lookup, hash/compare or hash/store, signed-token response. All
//! request and response bodies are JSON. Validation failures and credential
//! errors are returned as JSON maps of field name to message.
//!
//! # Endpoints
//!
//! - `GET /api/users/test` - Public liveness probe
//! - `POST /api/users/register` - User registration
//! - `POST /api/users/login` - User login, returns a bearer token
//! - `GET /api/users/current` - Identity of the authenticated caller

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, user store, and token management
pub mod auth;

/// Input-shape validation
pub mod validation;

/// Request authentication middleware
pub mod middleware;

/// Service error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
pub use server::state::AppState;
