//! Decoded token claims

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ClaimsError;

/// Claim name carrying granted permission strings
pub const PERMISSIONS_CLAIM: &str = "permissions";

/// Claims of a verified token.
///
/// Only produced by [`TokenVerifier::verify`](crate::TokenVerifier::verify)
/// (or built directly in tests); lives for a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Raw claim value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// `sub` claim
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// `iss` claim
    pub fn issuer(&self) -> Option<&str> {
        self.get("iss").and_then(Value::as_str)
    }

    /// `exp` claim as a unix timestamp
    pub fn expires_at(&self) -> Option<i64> {
        self.get("exp").and_then(Value::as_i64)
    }

    /// Granted permissions.
    ///
    /// Fails with [`ClaimsError::PermissionsMissing`] when the claim is absent
    /// and [`ClaimsError::PermissionsMalformed`] when it is not an array of
    /// strings.
    pub fn permissions(&self) -> Result<Vec<&str>, ClaimsError> {
        let value = self
            .get(PERMISSIONS_CLAIM)
            .ok_or(ClaimsError::PermissionsMissing)?;
        let list = value.as_array().ok_or(ClaimsError::PermissionsMalformed)?;
        list.iter()
            .map(|p| p.as_str().ok_or(ClaimsError::PermissionsMalformed))
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}
