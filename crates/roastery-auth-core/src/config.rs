//! Configuration types for token verification

use std::time::Duration;

use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::KeySource;

/// Invalid verifier configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Token verification configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Expected `iss` claim (e.g., https://tenant.auth0.com/)
    pub issuer: String,
    /// Expected `aud` claim
    pub audience: String,
    /// Where the trusted signing keys come from
    pub key_source: KeySource,
    /// Only algorithm accepted in token headers
    pub algorithm: Algorithm,
    /// Clock skew allowance for `exp`/`nbf`, in seconds
    pub leeway_secs: u64,
    /// How long a fetched key set is trusted before refetching
    pub jwks_cache_duration: Duration,
}

impl AuthConfig {
    /// Create a new auth config
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        key_source: KeySource,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            key_source,
            algorithm: Algorithm::RS256,
            leeway_secs: 0,
            jwks_cache_duration: Duration::from_secs(60 * 60), // 1 hour
        }
    }

    /// Create a new auth config, rejecting empty issuer or audience
    pub fn try_new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        key_source: KeySource,
    ) -> Result<Self, AuthConfigError> {
        let config = Self::new(issuer, audience, key_source);
        if config.issuer.trim().is_empty() {
            return Err(AuthConfigError::Empty("issuer"));
        }
        if config.audience.trim().is_empty() {
            return Err(AuthConfigError::Empty("audience"));
        }
        Ok(config)
    }

    /// Config for an Auth0-style tenant: issuer `https://<domain>/`, keys
    /// published at `https://<domain>/.well-known/jwks.json`
    pub fn for_domain(
        domain: &str,
        audience: impl Into<String>,
    ) -> Result<Self, AuthConfigError> {
        let domain = domain
            .trim()
            .trim_start_matches("https://")
            .trim_end_matches('/');
        if domain.is_empty() {
            return Err(AuthConfigError::Empty("domain"));
        }
        Self::try_new(
            format!("https://{domain}/"),
            audience,
            KeySource::Remote {
                url: format!("https://{domain}/.well-known/jwks.json"),
            },
        )
    }

    /// Replace the key source (e.g., a JWKS URL override or a static set)
    pub fn with_key_source(mut self, key_source: KeySource) -> Self {
        self.key_source = key_source;
        self
    }

    /// Set the accepted signing algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set clock skew allowance
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Set JWKS cache duration
    pub fn with_jwks_cache_duration(mut self, duration: Duration) -> Self {
        self.jwks_cache_duration = duration;
        self
    }
}
