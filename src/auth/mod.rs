//! Authentication Module
//!
//! This module handles user registration, login, and session identification.
//! It provides the user store operations, bearer-token management, avatar
//! derivation, and the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store operations
//! ├── sessions.rs     - JWT token management
//! ├── gravatar.rs     - Avatar URL derivation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── test.rs     - Public liveness probe
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── current.rs  - Current-user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate input, check email uniqueness, hash the
//!    password, persist the record
//! 2. **Login**: validate input, look up by email, verify the password,
//!    sign a one-hour bearer token embedding id, name, and avatar
//! 3. **Current**: verify the bearer token, load the principal, echo
//!    identity fields
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost factor 10) before storage
//! - Tokens are HS256 JWTs that expire after one hour

/// User model and store operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Gravatar URL derivation
pub mod gravatar;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest};
pub use handlers::{current_user, login, register, users_test};
