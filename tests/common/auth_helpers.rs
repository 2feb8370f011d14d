//! Authentication test helpers
//!
//! Utilities for creating test users and bearer tokens directly through
//! the library, bypassing the HTTP surface.

use sqlx::PgPool;

use devlink::auth::gravatar::avatar_url;
use devlink::auth::sessions::create_token;
use devlink::auth::users::create_user;

/// Bcrypt cost for test credentials, matching the register handler
const BCRYPT_COST: u32 = 10;

/// Credentials of a user created for a test
pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = bcrypt::hash(password, BCRYPT_COST)?;
    let avatar = avatar_url(email);

    let user = create_user(
        pool,
        name.to_string(),
        email.to_string(),
        password_hash,
        avatar,
    )
    .await?;

    let token = create_token(user.id, user.name.clone(), user.avatar.clone())?;

    Ok(TestUser {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Build an Authorization header value from a raw token
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
