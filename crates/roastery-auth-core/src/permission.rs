//! Permission checks

use crate::{AuthError, Claims};

/// Permission a route requires, fixed at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequiredPermission(&'static str);

impl RequiredPermission {
    pub const fn new(permission: &'static str) -> Self {
        Self(permission)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for RequiredPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for RequiredPermission {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Check that `claims` grant `required`.
///
/// A missing `permissions` claim is [`AuthError::InvalidClaims`] (the identity
/// provider is not set up for permission-based access); a present claim
/// without the permission is [`AuthError::Unauthorized`].
pub fn authorize(claims: &Claims, required: &str) -> Result<(), AuthError> {
    let granted = claims.permissions()?;

    if granted.iter().any(|p| *p == required) {
        Ok(())
    } else {
        tracing::debug!(
            required,
            subject = claims.subject().unwrap_or("<none>"),
            "Permission not granted"
        );
        Err(AuthError::Unauthorized(required.to_string()))
    }
}
