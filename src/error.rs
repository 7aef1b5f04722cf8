use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error type for API endpoints
///
/// Every failure collapses to a plain-text body echoed to the caller. Store
/// errors keep the backend's message verbatim.
#[derive(Debug)]
pub enum ApiError {
    /// SET failed in the store
    SetFailed(anyhow::Error),
    /// GET failed in the store
    GetFailed(anyhow::Error),
    /// Key not present in the store
    KeyNotFound(String),
    /// Store did not answer a health probe
    StoreUnavailable(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SetFailed(_) | ApiError::GetFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::SetFailed(err) => format!("Error setting key: {}", err),
            ApiError::GetFailed(err) => format!("Error getting key: {}", err),
            ApiError::KeyNotFound(key) => format!("Key \"{}\" not found in Redis", key),
            ApiError::StoreUnavailable(err) => format!("Cannot connect to Redis: {}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}
