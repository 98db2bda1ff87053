//! JWT verification against the trusted key set

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, decode_header, get_current_timestamp, Validation};

use crate::{AuthConfig, AuthError, Claims, ClaimsError, TrustedKeys};

/// Verifies bearer tokens and decodes their claims.
///
/// Checks, in order: header structure and `kid`, signing algorithm, key
/// lookup, signature, then `exp`/`aud`/`iss`. Cheap to clone; clones share
/// the key cache.
#[derive(Clone, Debug)]
pub struct TokenVerifier {
    config: AuthConfig,
    keys: TrustedKeys,
}

impl TokenVerifier {
    /// Create a verifier whose key set is loaded from `config.key_source`
    pub fn new(config: AuthConfig) -> Self {
        let keys = TrustedKeys::new(config.key_source.clone(), config.jwks_cache_duration);
        Self { config, keys }
    }

    /// Create a verifier with a custom HTTP client for JWKS fetching
    pub fn with_client(config: AuthConfig, http_client: reqwest::Client) -> Self {
        let keys = TrustedKeys::with_client(
            config.key_source.clone(),
            config.jwks_cache_duration,
            http_client,
        );
        Self { config, keys }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn keys(&self) -> &TrustedKeys {
        &self.keys
    }

    /// Verify a token (without the `Bearer ` prefix) and return its claims
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Failed to decode token header: {}", e);
            AuthError::invalid_header("Unable to parse authentication token.")
        })?;

        let kid = header.kid.ok_or_else(|| {
            tracing::debug!("Token missing kid");
            AuthError::invalid_header("Authorization malformed.")
        })?;

        if header.alg != self.config.algorithm {
            tracing::debug!(alg = ?header.alg, "Unexpected signing algorithm");
            return Err(AuthError::invalid_header("Unsupported signing algorithm."));
        }

        let key = self.keys.find(&kid).await?;

        let token_data = decode::<Claims>(token, &key, &self.validation()).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            map_validation_error(&e)
        })?;

        let claims = token_data.claims;
        check_not_expired(&claims, now_secs(), self.config.leeway_secs)?;
        Ok(claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.config.algorithm);
        validation.leeway = self.config.leeway_secs;
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation
    }
}

fn now_secs() -> i64 {
    i64::try_from(get_current_timestamp()).unwrap_or(i64::MAX)
}

/// `exp` must lie strictly in the future (`jsonwebtoken` still admits
/// `exp == now`).
fn check_not_expired(claims: &Claims, now: i64, leeway_secs: u64) -> Result<(), AuthError> {
    let leeway = i64::try_from(leeway_secs).unwrap_or(i64::MAX);
    match claims.expires_at() {
        Some(exp) if exp.saturating_add(leeway) > now => Ok(()),
        Some(_) => Err(AuthError::TokenExpired),
        None => Err(ClaimsError::Missing("exp".into()).into()),
    }
}

fn map_validation_error(err: &JwtError) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience => ClaimsError::Audience.into(),
        ErrorKind::InvalidIssuer => ClaimsError::Issuer.into(),
        ErrorKind::ImmatureSignature => ClaimsError::NotYetValid.into(),
        ErrorKind::MissingRequiredClaim(claim) => ClaimsError::Missing(claim.clone()).into(),
        ErrorKind::InvalidSignature => AuthError::invalid_header("Invalid token signature."),
        ErrorKind::InvalidAlgorithm => AuthError::invalid_header("Unsupported signing algorithm."),
        _ => AuthError::invalid_header("Unable to parse authentication token."),
    }
}
