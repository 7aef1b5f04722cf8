use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /set/{key}/{value} handler - Write a value to the store
#[utoipa::path(
    get,
    path = routes::SET,
    params(
        ("key" = String, Path, description = "Key to write"),
        ("value" = String, Path, description = "Value stored under the key")
    ),
    responses(
        (status = 200, description = "Value stored", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "kv"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    Path((key, value)): Path<(String, String)>,
) -> Result<String, ApiError> {
    if let Err(err) = state.store.set(&key, &value).await {
        tracing::error!("Failed to set key {}: {}", key, err);
        return Err(ApiError::SetFailed(err));
    }

    tracing::info!("Successfully set key: {}", key);
    Ok(format!("Set {}={} in Redis", key, value))
}
