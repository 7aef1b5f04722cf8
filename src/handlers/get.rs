use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /get/{key} handler - Read a value from the store
#[utoipa::path(
    get,
    path = routes::GET,
    params(
        ("key" = String, Path, description = "Key to read")
    ),
    responses(
        (status = 200, description = "Value found", body = String, content_type = "text/plain"),
        (status = 404, description = "Key not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String, ApiError> {
    match state.store.get(&key).await {
        Ok(Some(value)) => {
            tracing::info!("Successfully retrieved key: {}", key);
            Ok(format!("Value for key \"{}\": {}", key, value))
        }
        Ok(None) => {
            tracing::info!("Key not found: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
        Err(err) => {
            tracing::error!("Failed to get key {}: {}", key, err);
            Err(ApiError::GetFailed(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{send_get, test_app};
    use crate::store::memory::{FailingStore, MemoryStore};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_set_then_get() {
        let app = test_app(MemoryStore::new());

        let (status, body) = send_get(&app, "/set/foo/bar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Set foo=bar in Redis");

        let (status, body) = send_get(&app, "/get/foo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Value for key \"foo\": bar");
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found() {
        let app = test_app(MemoryStore::new());

        let (status, body) = send_get(&app, "/get/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Key \"missing\" not found in Redis");
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let app = test_app(MemoryStore::new());

        send_get(&app, "/set/color/red").await;
        send_get(&app, "/set/color/blue").await;

        let (status, body) = send_get(&app, "/get/color").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Value for key \"color\": blue");
    }

    #[tokio::test]
    async fn test_round_trip_printable_strings() {
        let app = test_app(MemoryStore::new());
        let pairs = [
            ("a", "1"),
            ("user:42", "alice"),
            ("%C3%A9t%C3%A9", "%E2%9C%93"),
            ("with%20space", "some%20value"),
            ("quote%22key", "semi;colon"),
        ];

        for (key, value) in pairs {
            let (status, _) = send_get(&app, &format!("/set/{}/{}", key, value)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let expected = [
            ("a", "1"),
            ("user:42", "alice"),
            ("été", "✓"),
            ("with space", "some value"),
            ("quote\"key", "semi;colon"),
        ];
        for ((encoded_key, _), (key, value)) in pairs.iter().zip(expected) {
            let (status, body) = send_get(&app, &format!("/get/{}", encoded_key)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, format!("Value for key \"{}\": {}", key, value));
        }
    }

    #[tokio::test]
    async fn test_get_endpoint_store_error() {
        let app = test_app(FailingStore {
            message: "Connection reset by peer",
        });

        let (status, body) = send_get(&app, "/get/foo").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error getting key: Connection reset by peer");
    }
}
