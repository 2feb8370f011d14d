/**
 * Session Tokens
 *
 * This module handles bearer-token generation and validation. A login
 * issues an HS256 JWT whose claims embed the user's id, name, and avatar;
 * the token expires after one hour.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime in seconds
const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the JWT signing secret from the environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "dev-secret-change-in-production".to_string()
    })
}

/// Create a bearer token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID)
/// * `name` - Display name, embedded in the claims
/// * `avatar` - Avatar URL, embedded in the claims
///
/// # Returns
/// Signed JWT string, expiring one hour from now.
pub fn create_token(
    user_id: uuid::Uuid,
    name: String,
    avatar: String,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        name,
        avatar,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a bearer token
///
/// Signature and expiry are both checked.
///
/// # Returns
/// Decoded claims, or the verification error.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
