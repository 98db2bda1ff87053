//! Auth errors

use thiserror::Error;

/// Authorization failures.
///
/// Each variant maps to exactly one HTTP status and error code; the HTTP
/// layer renders them without reinterpreting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request
    #[error("Authorization header is expected.")]
    MissingHeader,

    /// Header malformed, or token structurally/cryptographically invalid
    #[error("{0}")]
    InvalidHeader(String),

    /// Token is past its `exp` claim
    #[error("Token expired.")]
    TokenExpired,

    /// Claims are present but unacceptable
    #[error(transparent)]
    InvalidClaims(#[from] ClaimsError),

    /// Valid token without the route's permission
    #[error("Permission not found: {0}.")]
    Unauthorized(String),

    /// Signing keys could not be loaded from the key source
    #[error("signing keys unavailable: {0}")]
    KeySetUnavailable(String),
}

/// Why a verified token's claims were rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("Incorrect claims. Please, check the audience.")]
    Audience,

    #[error("Incorrect claims. Please, check the issuer.")]
    Issuer,

    #[error("Incorrect claims. Missing required claim: {0}.")]
    Missing(String),

    #[error("Token is not valid yet.")]
    NotYetValid,

    /// Identity provider is not configured to issue permissions
    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permissions claim must be an array of strings.")]
    PermissionsMalformed,
}

impl ClaimsError {
    /// Permission-claim problems are configuration errors (400); the rest are
    /// verification failures (401).
    pub fn status_code(&self) -> u16 {
        match self {
            Self::PermissionsMissing | Self::PermissionsMalformed => 400,
            Self::Audience | Self::Issuer | Self::Missing(_) | Self::NotYetValid => 401,
        }
    }
}

impl AuthError {
    /// Create an invalid header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader(message.into())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingHeader | Self::InvalidHeader(_) | Self::TokenExpired => 401,
            Self::InvalidClaims(claims) => claims.status_code(),
            Self::Unauthorized(_) => 403,
            Self::KeySetUnavailable(_) => 503,
        }
    }

    /// Get error code for API responses and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "authorization_header_missing",
            Self::InvalidHeader(_) => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims(_) => "invalid_claims",
            Self::Unauthorized(_) => "unauthorized",
            Self::KeySetUnavailable(_) => "key_set_unavailable",
        }
    }
}
