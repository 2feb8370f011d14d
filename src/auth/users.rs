/**
 * User Model and Store Operations
 *
 * This module defines the user record and its database operations.
 *
 * # Lifecycle
 *
 * Records are created on registration and read on login and identity
 * checks. Nothing updates or deletes them.
 *
 * # Email Uniqueness
 *
 * Uniqueness is enforced by the register handler's pre-insert lookup, not
 * by a database constraint. Two concurrent registrations with the same
 * email can both pass the check.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User record as stored in the database
///
/// The struct serializes with all columns, including `password_hash`. The
/// register endpoint returns the record as-is.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Display name
    pub name: String,
    /// Email address, used as the login key
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Gravatar URL derived from the email at registration time
    pub avatar: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - Email address
/// * `password_hash` - Hashed password
/// * `avatar` - Avatar URL
///
/// # Returns
/// The created record, or the database error.
pub async fn create_user(
    pool: &PgPool,
    name: String,
    email: String,
    password_hash: String,
    avatar: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, avatar, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, password_hash, avatar, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(&avatar)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get a user by email
///
/// # Returns
/// The user, or `None` if no record matches.
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, avatar, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by ID
///
/// # Returns
/// The user, or `None` if no record matches.
pub async fn get_user_by_id(pool: &PgPool, id: uuid::Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, avatar, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
