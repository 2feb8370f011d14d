//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the user endpoints.
//!
//! # Handlers
//!
//! - **`users_test`** - GET /api/users/test - Public liveness probe
//! - **`register`** - POST /api/users/register - User registration
//! - **`login`** - POST /api/users/login - User authentication
//! - **`current_user`** - GET /api/users/current - Authenticated identity
//!
//! # Error Contract
//!
//! Validation and credential failures are returned as JSON maps of field
//! name to message with status 400, or 404 for an unknown login email.
//! Infrastructure failures are logged and returned as 500; a missing
//! store returns 503.

/// Request and response types
pub mod types;

/// Public probe handler
pub mod test;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current-user handler
pub mod current;

// Re-export commonly used types
pub use types::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest};

// Re-export handlers
pub use current::current_user;
pub use login::login;
pub use register::register;
pub use test::users_test;
