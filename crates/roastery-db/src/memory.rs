//! In-memory drink repository

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use roastery_types::{Drink, DrinkId};

use crate::error::{DbError, DbResult};
use crate::repo::{seed_drinks, DrinkChanges, DrinkRepository, NewDrink};

/// Process-local drink store with the same semantics as the PostgreSQL one:
/// serial IDs starting at 1, unique titles, IDs never reused.
#[derive(Debug)]
pub struct MemoryDrinkRepository {
    drinks: DashMap<DrinkId, Drink>,
    // title -> owner; reserving through the entry API keeps titles unique
    titles: DashMap<String, DrinkId>,
    next_id: AtomicI32,
}

impl Default for MemoryDrinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDrinkRepository {
    pub fn new() -> Self {
        Self {
            drinks: DashMap::new(),
            titles: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Store pre-populated with the seed drinks
    pub fn seeded() -> DbResult<Self> {
        let repo = Self::new();
        for drink in seed_drinks() {
            repo.insert(drink)?;
        }
        Ok(repo)
    }

    fn insert(&self, drink: NewDrink) -> DbResult<Drink> {
        let id = match self.titles.entry(drink.title.clone()) {
            Entry::Occupied(_) => return Err(DbError::Conflict(drink.title)),
            Entry::Vacant(slot) => {
                let id = DrinkId(self.next_id.fetch_add(1, Ordering::Relaxed));
                slot.insert(id);
                id
            }
        };

        let drink = Drink {
            id,
            title: drink.title,
            recipe: drink.recipe,
        };
        self.drinks.insert(id, drink.clone());
        Ok(drink)
    }
}

#[async_trait]
impl DrinkRepository for MemoryDrinkRepository {
    async fn list(&self) -> DbResult<Vec<Drink>> {
        let mut drinks: Vec<Drink> = self.drinks.iter().map(|e| e.value().clone()).collect();
        drinks.sort_by_key(|d| d.id);
        Ok(drinks)
    }

    async fn find_by_id(&self, id: DrinkId) -> DbResult<Option<Drink>> {
        Ok(self.drinks.get(&id).map(|e| e.value().clone()))
    }

    async fn create(&self, drink: NewDrink) -> DbResult<Drink> {
        self.insert(drink)
    }

    async fn update(&self, id: DrinkId, changes: DrinkChanges) -> DbResult<Drink> {
        let mut drink = self.drinks.get_mut(&id).ok_or(DbError::NotFound)?;

        if let Some(title) = changes.title {
            if title != drink.title {
                match self.titles.entry(title.clone()) {
                    Entry::Occupied(_) => return Err(DbError::Conflict(title)),
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
                self.titles.remove(&drink.title);
                drink.title = title;
            }
        }
        if let Some(recipe) = changes.recipe {
            drink.recipe = recipe;
        }

        Ok(drink.clone())
    }

    async fn delete(&self, id: DrinkId) -> DbResult<bool> {
        match self.drinks.remove(&id) {
            Some((_, drink)) => {
                self.titles.remove(&drink.title);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}
