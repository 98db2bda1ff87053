//! Application state for the Drinks API service.

use std::sync::Arc;
use std::time::Duration;

use roastery_auth_core::TokenVerifier;
use roastery_db::DrinkRepository;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Token verifier shared by every permission layer (one key cache)
    pub verifier: Arc<TokenVerifier>,
    /// Drink storage
    pub drinks: Arc<dyn DrinkRepository>,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, drinks: Arc<dyn DrinkRepository>) -> Self {
        Self {
            verifier: Arc::new(TokenVerifier::new(config.auth.clone())),
            drinks,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> Duration {
        self.config.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
