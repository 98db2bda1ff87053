//! Drinks API
//!
//! Coffee shop drinks catalog with permission-gated routes.
//!
//! ## REST Endpoints
//!
//! - `GET /drinks` - Short drink list (`get:drinks`)
//! - `GET /drinks-detail` - Long drink list (`get:drinks-detail`)
//! - `POST /drinks` - Create a drink (`post:drinks`)
//! - `PATCH /drinks/{id}` - Update a drink (`patch:drinks`)
//! - `DELETE /drinks/{id}` - Delete a drink (`delete:drinks`)
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod permissions;
pub mod state;

pub use app::build_router;
pub use config::{Config, ConfigError};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
