//! Middleware Module
//!
//! Request-processing middleware for the server. Currently this is the
//! bearer-token authentication layer protecting identity endpoints.

/// Bearer-token authentication
pub mod auth;

// Re-export commonly used types
pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
