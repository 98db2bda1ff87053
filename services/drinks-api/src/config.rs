//! Configuration for the Drinks API service.

use std::time::Duration;

use roastery_auth_core::{AuthConfig, AuthConfigError, Jwks, KeySource};

/// Drinks API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Drop, recreate and seed the drinks table on startup
    pub reset_database: bool,
    /// Token verification configuration
    pub auth: AuthConfig,
    /// Request timeout
    pub request_timeout: Duration,
    /// Metrics enabled
    pub metrics_enabled: bool,
}

impl Config {
    /// Defaults around an auth configuration
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            http_port: 8080,
            database_url: None,
            reset_database: false,
            auth,
            request_timeout: Duration::from_secs(30),
            metrics_enabled: true,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// if it is set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Identity provider
        let domain = lookup("AUTH0_DOMAIN").ok_or(ConfigError::Missing("AUTH0_DOMAIN"))?;
        let audience = lookup("API_AUDIENCE").ok_or(ConfigError::Missing("API_AUDIENCE"))?;

        let jwks_cache_secs: u64 = parse_or(&lookup, "JWKS_CACHE_SECS", 3600)?;

        let mut auth = AuthConfig::for_domain(&domain, audience)?
            .with_jwks_cache_duration(Duration::from_secs(jwks_cache_secs));

        // A static key file wins over a URL override
        if let Some(path) = lookup("JWKS_PATH") {
            let json =
                std::fs::read_to_string(&path).map_err(|_| ConfigError::Invalid("JWKS_PATH"))?;
            let jwks = Jwks::from_json(&json).map_err(|_| ConfigError::Invalid("JWKS_PATH"))?;
            auth = auth.with_key_source(KeySource::Static(jwks));
        } else if let Some(url) = lookup("JWKS_URL") {
            auth = auth.with_key_source(KeySource::Remote { url });
        }

        // Server
        let http_port = parse_or(&lookup, "HTTP_PORT", 8080)?;
        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        // Storage
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let reset_database = parse_or(&lookup, "RESET_DATABASE", false)?;

        // Metrics
        let metrics_enabled = parse_or(&lookup, "METRICS_ENABLED", true)?;

        Ok(Self {
            http_port,
            database_url,
            reset_database,
            auth,
            request_timeout: Duration::from_secs(request_timeout_secs),
            metrics_enabled,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Invalid auth configuration: {0}")]
    Auth(#[from] AuthConfigError),
}
