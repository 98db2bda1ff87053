//! Roastery Auth Core - Request authorization logic
//!
//! Everything needed to decide whether a request carrying a bearer token may
//! reach a protected route:
//! - [`bearer_token`] parses the `Authorization` header value
//! - [`TokenVerifier`] checks structure, signature, expiry, audience and issuer
//!   against a [`TrustedKeys`] set and returns the decoded [`Claims`]
//! - [`authorize`] checks the claims grant a route's [`RequiredPermission`]
//!
//! Every failure is an [`AuthError`] carrying its HTTP status and error code.
//! This crate never builds HTTP responses itself.

pub mod claims;
pub mod config;
pub mod error;
pub mod header;
pub mod keys;
pub mod permission;
pub mod token;

pub use claims::Claims;
pub use config::{AuthConfig, AuthConfigError};
pub use error::{AuthError, ClaimsError};
pub use header::{bearer_token, BEARER_SCHEME};
pub use keys::{Jwk, Jwks, KeySet, KeySource, TrustedKeys};
pub use permission::{authorize, RequiredPermission};
pub use token::TokenVerifier;
