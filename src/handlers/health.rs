use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /health handler - Health check endpoint
///
/// Sends PING to Redis to verify store connectivity.
/// Returns 200 OK if the store answers, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = String, content_type = "text/plain"),
        (status = 503, description = "Service is unhealthy", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    match state.store.ping().await {
        Ok(()) => {
            tracing::debug!("Health check passed");
            Ok("healthy")
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err(ApiError::StoreUnavailable(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{send_get, test_app, test_config};
    use crate::redis_client::RedisStore;
    use crate::store::memory::{FailingStore, MemoryStore};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = test_app(MemoryStore::new());

        let (status, body) = send_get(&app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let app = test_app(FailingStore {
            message: "Connection refused (os error 111)",
        });

        let (status, body) = send_get(&app, "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "Cannot connect to Redis: Connection refused (os error 111)");
    }

    #[tokio::test]
    async fn test_unreachable_redis_fails_every_route() {
        let mut config = test_config();
        config.redis_host = "127.0.0.1".to_string();
        config.redis_port = 1;

        // Startup tolerates the refused connection
        let store = RedisStore::connect(&config).unwrap();
        let app = test_app(store);

        let (status, body) = send_get(&app, "/set/foo/bar").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Error setting key: "));
        assert!(body.len() > "Error setting key: ".len());

        let (status, body) = send_get(&app, "/get/foo").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Error getting key: "));
        assert!(body.len() > "Error getting key: ".len());

        let (status, _) = send_get(&app, "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
