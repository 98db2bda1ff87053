//! Axum extractors for handlers behind a [`PermissionLayer`](crate::PermissionLayer)

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use roastery_auth_core::Claims;

use crate::error::ErrorEnvelope;

/// Claims of the token that passed the route's permission check.
///
/// Only meaningful on routes wrapped in a `PermissionLayer`; elsewhere the
/// extractor fails with a 500 since that is a routing mistake, not a client
/// error.
///
/// ```ignore
/// async fn handler(claims: Authorized) -> impl IntoResponse {
///     format!("hello {:?}", claims.subject())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Authorized(pub Claims);

impl Deref for Authorized {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Authorized {
    pub fn into_inner(self) -> Claims {
        self.0
    }
}

impl<S> FromRequestParts<S> for Authorized
where
    S: Send + Sync,
{
    type Rejection = ErrorEnvelope;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(Authorized)
            .ok_or_else(|| {
                tracing::error!("Authorized extractor used on a route without PermissionLayer");
                ErrorEnvelope::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            })
    }
}
