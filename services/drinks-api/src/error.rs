//! Error types for the Drinks API service.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roastery_auth_core::AuthError;
use roastery_axum::{AuthRejection, ErrorEnvelope};
use roastery_db::DbError;
use roastery_types::DrinkError;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable: {0}")]
    Validation(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal server error")]
    Storage(DbError),

    #[error("service unavailable")]
    Unavailable,

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Auth(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::Validation(_) => "unprocessable",
            Self::BadRequest(_) => "bad_request",
            Self::Conflict(_) => "conflict",
            Self::Storage(_) => "internal_error",
            Self::Unavailable => "unavailable",
            Self::Auth(e) => e.error_code(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            DbError::Conflict(title) => {
                Self::Conflict(format!("a drink titled {title:?} already exists"))
            }
            other => Self::Storage(other),
        }
    }
}

impl From<DrinkError> for ApiError {
    fn from(err: DrinkError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON of the wrong shape
            JsonRejection::JsonDataError(e) => Self::Validation(e.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => AuthRejection(err).into_response(),
            Self::Storage(ref err) => {
                tracing::error!(error = %err, "Storage error");
                ErrorEnvelope::new(self.status_code(), self.to_string()).into_response()
            }
            _ => {
                tracing::debug!(code = self.error_code(), error = %self, "Request failed");
                ErrorEnvelope::new(self.status_code(), self.to_string()).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
