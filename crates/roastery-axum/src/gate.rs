//! The authorization pipeline for a single required permission

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use roastery_auth_core::{
    authorize, bearer_token, AuthError, Claims, RequiredPermission, TokenVerifier,
};

/// Extract, verify, authorize.
///
/// Stops at the first failing stage; the protected handler only ever runs
/// after all three succeed.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    verifier: Arc<TokenVerifier>,
    permission: RequiredPermission,
}

impl PermissionGate {
    pub fn new(verifier: Arc<TokenVerifier>, permission: RequiredPermission) -> Self {
        Self {
            verifier,
            permission,
        }
    }

    pub fn permission(&self) -> RequiredPermission {
        self.permission
    }

    pub fn verifier(&self) -> &Arc<TokenVerifier> {
        &self.verifier
    }

    /// Run the pipeline against request headers, returning the verified claims
    pub async fn check(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = authorization_token(headers).inspect_err(|e| self.log_failure("extract", e))?;

        let claims = self
            .verifier
            .verify(token)
            .await
            .inspect_err(|e| self.log_failure("verify", e))?;

        authorize(&claims, self.permission.as_str())
            .inspect_err(|e| self.log_failure("authorize", e))?;

        Ok(claims)
    }

    fn log_failure(&self, stage: &'static str, err: &AuthError) {
        tracing::debug!(
            stage,
            permission = %self.permission,
            code = err.error_code(),
            "Authorization stage failed"
        );
    }
}

/// Run `handler` with the verified claims if `gate` admits the request.
///
/// The handler's own output, errors included, is returned untouched inside
/// `Ok`.
pub async fn enforce<F, Fut, T>(
    gate: &PermissionGate,
    headers: &HeaderMap,
    handler: F,
) -> Result<T, AuthError>
where
    F: FnOnce(Claims) -> Fut,
    Fut: Future<Output = T>,
{
    let claims = gate.check(headers).await?;
    Ok(handler(claims).await)
}

fn authorization_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .map(|v| {
            v.to_str().map_err(|_| {
                AuthError::invalid_header("Authorization header must be bearer token.")
            })
        })
        .transpose()?;

    bearer_token(value)
}
