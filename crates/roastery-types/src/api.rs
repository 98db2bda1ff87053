//! API response envelopes
//!
//! Every success body carries `"success": true`; errors are rendered by the
//! HTTP layer with `"success": false`.

use serde::{Deserialize, Serialize};

use crate::drink::DrinkId;

/// `{"success": true, "drinks": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T> DrinksResponse<T> {
    pub fn new(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

/// `{"success": true, "delete": <id>}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub delete: DrinkId,
}

impl DeletedResponse {
    pub fn new(id: DrinkId) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}
