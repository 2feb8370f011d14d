/**
 * Users Test Handler
 *
 * Public probe for the users route group. Useful for checking that the
 * router is up without touching the store.
 */

use axum::response::Json;

/// Probe handler for GET /api/users/test
pub async fn users_test() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "msg": "users test" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_users_test_body() {
        let Json(body) = users_test().await;
        assert_eq!(body, serde_json::json!({ "msg": "users test" }));
    }
}
