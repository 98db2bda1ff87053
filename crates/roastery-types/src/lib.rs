//! Roastery Types - Shared domain types
//!
//! This crate contains domain types used across Roastery services:
//! - Drinks and their recipes
//! - Short and long representations served by the API
//! - Response envelopes

pub mod api;
pub mod drink;
pub mod error;

pub use api::*;
pub use drink::*;
pub use error::*;
