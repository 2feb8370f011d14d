/**
 * Gravatar URL Derivation
 *
 * Builds the avatar URL stored with each user record. Gravatar addresses
 * are a hex digest of the normalized email, with query parameters for
 * size (200px), rating (pg), and the "mystery man" default image.
 */

use sha2::{Digest, Sha256};

/// Derive a Gravatar URL from an email address
///
/// The address is trimmed and lowercased before hashing, so differently
/// cased spellings of the same email produce the same avatar.
///
/// # Example
///
/// ```rust
/// use devlink::auth::gravatar::avatar_url;
///
/// let url = avatar_url("Jane@Example.com ");
/// assert!(url.starts_with("https://www.gravatar.com/avatar/"));
/// assert!(url.ends_with("?s=200&r=pg&d=mm"));
/// ```
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm", digest)
}
