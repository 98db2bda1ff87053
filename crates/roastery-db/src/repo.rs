//! Repository trait
//!
//! Async storage interface for drinks. Handlers only see this trait.

use async_trait::async_trait;
use roastery_types::{Drink, DrinkId, Ingredient};

use crate::error::DbResult;

/// Create drink input (already validated)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Partial update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkChanges {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

impl DrinkChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}

/// Drink repository trait
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// All drinks, ordered by ID
    async fn list(&self) -> DbResult<Vec<Drink>>;

    /// Find a drink by ID
    async fn find_by_id(&self, id: DrinkId) -> DbResult<Option<Drink>>;

    /// Insert a drink; `Conflict` if the title is taken
    async fn create(&self, drink: NewDrink) -> DbResult<Drink>;

    /// Apply changes and return the updated drink; `NotFound` for unknown IDs
    async fn update(&self, id: DrinkId, changes: DrinkChanges) -> DbResult<Drink>;

    /// Delete a drink, returning whether it existed
    async fn delete(&self, id: DrinkId) -> DbResult<bool>;

    /// Check the store is reachable
    async fn ping(&self) -> DbResult<()>;
}

/// Drinks a freshly reset store starts with
pub fn seed_drinks() -> Vec<NewDrink> {
    vec![NewDrink {
        title: "water".to_string(),
        recipe: vec![Ingredient::new("water", "blue", 1)],
    }]
}
