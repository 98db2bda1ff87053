//! Trusted signing keys (JWKS) with caching

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::DecodingKey;
use moka::future::Cache;
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Single cache entry holding the whole key set
const KEY_SET_ENTRY: &str = "jwks";

/// JWKS (JSON Web Key Set) document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    /// Parse a JWKS document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Individual JWK (JSON Web Key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    #[serde(default)]
    pub kid: Option<String>,
    pub kty: String,
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(rename = "use", default)]
    pub key_use: Option<String>,
    #[serde(default)]
    pub n: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

/// Where trusted keys are loaded from
#[derive(Debug, Clone)]
pub enum KeySource {
    /// JWKS endpoint published by the identity provider
    Remote { url: String },
    /// Keys supplied through configuration
    Static(Jwks),
}

/// Usable verification keys, indexed by key ID
#[derive(Clone, Default)]
pub struct KeySet {
    keys: HashMap<String, Arc<DecodingKey>>,
}

impl KeySet {
    /// Build a key set from a JWKS document.
    ///
    /// Keys without a `kid`, non-RSA keys, encryption keys and keys whose
    /// components do not parse are skipped.
    pub fn from_jwks(jwks: &Jwks) -> Self {
        let mut keys = HashMap::with_capacity(jwks.keys.len());

        for jwk in &jwks.keys {
            let Some(kid) = jwk.kid.as_deref() else {
                tracing::debug!("Skipping JWK without kid");
                continue;
            };
            if jwk.kty != "RSA" {
                tracing::debug!(kid, kty = %jwk.kty, "Skipping non-RSA JWK");
                continue;
            }
            if jwk.key_use.as_deref().is_some_and(|u| u != "sig") {
                tracing::debug!(kid, "Skipping JWK not meant for signatures");
                continue;
            }
            let (Some(n), Some(e)) = (jwk.n.as_deref(), jwk.e.as_deref()) else {
                tracing::debug!(kid, "Skipping RSA JWK without n/e components");
                continue;
            };
            match DecodingKey::from_rsa_components(n, e) {
                Ok(key) => {
                    keys.insert(kid.to_string(), Arc::new(key));
                }
                Err(e) => tracing::warn!(kid, error = %e, "Skipping unparsable JWK"),
            }
        }

        Self { keys }
    }

    pub fn get(&self, kid: &str) -> Option<Arc<DecodingKey>> {
        self.keys.get(kid).cloned()
    }

    pub fn kids(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl std::fmt::Debug for KeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySet")
            .field("kids", &self.keys.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Process-wide trusted key set.
///
/// Loaded lazily on first use and cached for the configured window. Callers
/// racing on a cold cache wait on a single in-flight load. A key ID missing
/// from a warm cache is rejected without refetching, so forged `kid`s cannot
/// be used to flood the key endpoint.
#[derive(Clone)]
pub struct TrustedKeys {
    source: KeySource,
    http_client: reqwest::Client,
    cache: Cache<&'static str, Arc<KeySet>>,
}

impl TrustedKeys {
    /// Create a trusted key set with a JWKS-tuned HTTP client
    pub fn new(source: KeySource, cache_duration: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(2) // JWKS is typically one host
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_client(source, cache_duration, http_client)
    }

    /// Create a trusted key set with a custom HTTP client
    pub fn with_client(
        source: KeySource,
        cache_duration: Duration,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            source,
            http_client,
            cache: Cache::builder()
                .time_to_live(cache_duration)
                .max_capacity(1)
                .build(),
        }
    }

    /// Current key set, loading it if the cache is cold
    pub async fn key_set(&self) -> Result<Arc<KeySet>, AuthError> {
        self.cache
            .try_get_with(KEY_SET_ENTRY, self.load())
            .await
            .map_err(|e| (*e).clone())
    }

    /// Key for `kid`, or `InvalidHeader` if the set has no such key
    pub async fn find(&self, kid: &str) -> Result<Arc<DecodingKey>, AuthError> {
        let key_set = self.key_set().await?;
        key_set.get(kid).ok_or_else(|| {
            tracing::debug!(
                kid,
                known = ?key_set.kids().collect::<Vec<_>>(),
                "Unknown key ID"
            );
            AuthError::invalid_header("Unable to find the appropriate key.")
        })
    }

    /// Drop the cached key set (useful when keys rotate)
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }

    async fn load(&self) -> Result<Arc<KeySet>, AuthError> {
        let jwks = match &self.source {
            KeySource::Static(jwks) => jwks.clone(),
            KeySource::Remote { url } => self.fetch_jwks(url).await?,
        };

        let key_set = KeySet::from_jwks(&jwks);
        if key_set.is_empty() {
            tracing::warn!("Trusted key set contains no usable signing keys");
        } else {
            tracing::debug!(keys = key_set.len(), "Trusted key set loaded");
        }
        Ok(Arc::new(key_set))
    }

    async fn fetch_jwks(&self, url: &str) -> Result<Jwks, AuthError> {
        tracing::debug!("Fetching JWKS from {}", url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch JWKS: {}", e);
            AuthError::KeySetUnavailable("failed to fetch JWKS".to_string())
        })?;

        if !response.status().is_success() {
            tracing::error!("JWKS fetch returned status: {}", response.status());
            return Err(AuthError::KeySetUnavailable(format!(
                "JWKS endpoint returned {}",
                response.status()
            )));
        }

        response.json::<Jwks>().await.map_err(|e| {
            tracing::error!("Failed to parse JWKS: {}", e);
            AuthError::KeySetUnavailable("failed to parse JWKS".to_string())
        })
    }
}

impl std::fmt::Debug for TrustedKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustedKeys")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
