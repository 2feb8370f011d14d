/**
 * Authentication Handler Types
 *
 * Request and response types shared by the authentication handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name (2 to 30 characters)
    pub name: String,
    /// Email address, must be unique among users
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address the account was registered with
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Login response
///
/// The token field carries the `Bearer ` prefix so clients can copy it
/// into the `Authorization` header verbatim.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Always `true` on a successful login
    pub success: bool,
    /// `Bearer <jwt>`, valid for one hour
    pub token: String,
}

/// Identity of the authenticated caller
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CurrentUserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}
