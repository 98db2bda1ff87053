//! Roastery Axum - permission middleware for drinks routes
//!
//! Wires [`roastery_auth_core`] into axum:
//! - [`PermissionGate`] runs header extraction, token verification and the
//!   permission check for one required permission
//! - [`PermissionLayer`] applies a gate per route as a tower layer
//! - [`enforce`] wraps a single handler call with a gate
//! - [`Authorized`] hands the verified claims to the handler
//! - [`ErrorEnvelope`] is the JSON error body every failure is rendered as
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::{routing::post, Router};
//! use roastery_auth_core::{RequiredPermission, TokenVerifier};
//! use roastery_axum::{Authorized, PermissionLayer};
//!
//! const POST_DRINKS: RequiredPermission = RequiredPermission::new("post:drinks");
//!
//! async fn create(claims: Authorized) -> String {
//!     format!("created by {:?}", claims.subject())
//! }
//!
//! let verifier = Arc::new(TokenVerifier::new(config));
//! let app: Router = Router::new().route(
//!     "/drinks",
//!     post(create).route_layer(PermissionLayer::new(verifier, POST_DRINKS)),
//! );
//! ```

pub mod error;
pub mod extractors;
pub mod gate;
pub mod layer;

pub use error::{AuthRejection, ErrorEnvelope};
pub use extractors::Authorized;
pub use gate::{enforce, PermissionGate};
pub use layer::{PermissionLayer, PermissionService};

pub use roastery_auth_core::{AuthError, Claims, RequiredPermission, TokenVerifier};
