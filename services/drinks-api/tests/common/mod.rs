//! Common test utilities for drinks-api integration tests

#[path = "../../../../crates/roastery-auth-core/tests/common/jwks_mock.rs"]
pub mod jwks_mock;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use roastery_auth_core::{AuthConfig, KeySource};
use roastery_db::{DrinkRepository, MemoryDrinkRepository};
use serde_json::Value;
use tower::ServiceExt;

use drinks_api::{build_router, AppState, Config};

#[allow(unused_imports)]
pub use jwks_mock::{
    trusted_jwks, JwksMockServer, TestClaims, TestSigner, TEST_AUDIENCE, TEST_ISSUER,
};

/// Every drinks permission
#[allow(dead_code)]
pub const MANAGER: &[&str] = &[
    "get:drinks",
    "get:drinks-detail",
    "post:drinks",
    "patch:drinks",
    "delete:drinks",
];

/// Router plus the store behind it and a token signer
pub struct TestApp {
    pub router: Router,
    pub drinks: Arc<MemoryDrinkRepository>,
    pub signer: TestSigner,
}

impl TestApp {
    /// App trusting the test key through a static JWKS, with an empty store
    pub fn new() -> Self {
        Self::with_key_source(KeySource::Static(trusted_jwks()), MemoryDrinkRepository::new())
    }

    /// App whose store starts with the seed drinks
    #[allow(dead_code)]
    pub fn seeded() -> Self {
        Self::with_key_source(
            KeySource::Static(trusted_jwks()),
            MemoryDrinkRepository::seeded().unwrap(),
        )
    }

    pub fn with_key_source(key_source: KeySource, store: MemoryDrinkRepository) -> Self {
        let mut config = Config::new(AuthConfig::new(TEST_ISSUER, TEST_AUDIENCE, key_source));
        config.metrics_enabled = false;

        let drinks = Arc::new(store);
        let repo: Arc<dyn DrinkRepository> = drinks.clone();
        let router = build_router(AppState::new(config, repo), None);

        Self {
            router,
            drinks,
            signer: TestSigner::load(),
        }
    }

    /// Valid token granting `permissions`
    pub fn token(&self, permissions: &[&str]) -> String {
        self.signer
            .sign(&TestClaims::valid().with_permissions(permissions))
    }

    /// Send a request; `authorization` is the raw header value
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    /// Send with `Authorization: Bearer <token for permissions>`
    #[allow(dead_code)]
    pub async fn send_as(
        &self,
        permissions: &[&str],
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let header = format!("Bearer {}", self.token(permissions));
        self.send(method, uri, Some(&header), body).await
    }
}

/// Assert `body` is the error envelope for `status`
#[allow(dead_code)]
pub fn assert_error_envelope(body: &Value, status: StatusCode) {
    assert_eq!(body["success"], false, "body: {body}");
    assert_eq!(body["error"], status.as_u16(), "body: {body}");
    assert!(body["message"].is_string(), "body: {body}");
}
