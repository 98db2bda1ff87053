//! Health check handlers

use axum::extract::State;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Liveness probe - always returns OK if the service is running
pub async fn health() -> &'static str {
    "OK"
}

/// Readiness probe - checks storage connectivity
pub async fn ready(State(state): State<AppState>) -> ApiResult<&'static str> {
    state.drinks.ping().await.map_err(|e| {
        tracing::error!(error = %e, "Storage health check failed");
        ApiError::Unavailable
    })?;
    Ok("READY")
}
