//! Tower middleware layer enforcing a route's permission.
//!
//! Attach per route (`route_layer`) or per handler (`Handler::layer`), not
//! with `Router::layer`, so unmatched paths still 404 instead of 401.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use roastery_auth_core::{RequiredPermission, TokenVerifier};
use tower::{Layer, Service};

use crate::error::AuthRejection;
use crate::gate::PermissionGate;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Tower layer that admits a request only if its token grants `permission`
#[derive(Debug, Clone)]
pub struct PermissionLayer {
    gate: PermissionGate,
}

impl PermissionLayer {
    #[must_use]
    pub fn new(verifier: Arc<TokenVerifier>, permission: RequiredPermission) -> Self {
        Self::from_gate(PermissionGate::new(verifier, permission))
    }

    #[must_use]
    pub fn from_gate(gate: PermissionGate) -> Self {
        Self { gate }
    }
}

impl<S> Layer<S> for PermissionLayer {
    type Service = PermissionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PermissionService {
            inner,
            gate: self.gate.clone(),
        }
    }
}

/// Service produced by [`PermissionLayer`].
///
/// On success the verified [`Claims`](roastery_auth_core::Claims) are stored
/// in the request extensions; on failure the inner service is never called.
#[derive(Debug, Clone)]
pub struct PermissionService<S> {
    inner: S,
    gate: PermissionGate,
}

impl<S> Service<Request<Body>> for PermissionService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<Result<Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        // Take the service that was polled ready, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let gate = self.gate.clone();

        Box::pin(async move {
            let outcome = gate.check(req.headers()).await;
            match outcome {
                Ok(claims) => {
                    tracing::debug!(
                        permission = %gate.permission(),
                        subject = claims.subject().unwrap_or("<none>"),
                        "Request authorized"
                    );
                    req.extensions_mut().insert(claims);
                    inner.call(req).await
                }
                Err(err) => Ok(AuthRejection(err).into_response()),
            }
        })
    }
}
