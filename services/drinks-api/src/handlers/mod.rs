//! REST API handlers

pub mod drinks;
pub mod health;

use std::time::Instant;

pub use drinks::*;
pub use health::*;

use crate::error::ApiError;

/// Record handler operation duration with result label
#[inline]
pub(crate) fn record_op_duration(operation: &'static str, start: Instant, success: bool) {
    let result = if success { "ok" } else { "err" };
    metrics::histogram!(
        "drinks_operation_duration_seconds",
        "operation" => operation,
        "result" => result
    )
    .record(start.elapsed().as_secs_f64());
}

/// Fallback for unrouted paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for routed paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
