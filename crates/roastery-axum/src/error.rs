//! JSON error body shared by the middleware and the handlers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roastery_auth_core::AuthError;
use serde::{Deserialize, Serialize};

/// `{"success": false, "error": <status>, "message": <text>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }

    /// Status the envelope is sent with; unknown codes fall back to 500
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<&AuthError> for ErrorEnvelope {
    fn from(err: &AuthError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// An [`AuthError`] rendered as an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRejection(pub AuthError);

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope::from(&self.0);
        if envelope.status().is_server_error() {
            tracing::error!(code = self.0.error_code(), error = %self.0, "Authorization failed");
        } else {
            tracing::debug!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }
        envelope.into_response()
    }
}
