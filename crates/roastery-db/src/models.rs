//! Database row models

use roastery_types::{Drink, DrinkId, Ingredient};
use sqlx::types::JsonValue;
use sqlx::FromRow;

use crate::error::DbError;

/// Drink row from the database
#[derive(Debug, Clone, FromRow)]
pub struct DrinkRow {
    pub id: i32,
    pub title: String,
    pub recipe: JsonValue,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = DbError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        let recipe: Vec<Ingredient> = serde_json::from_value(row.recipe).map_err(|e| {
            tracing::error!(id = row.id, error = %e, "Stored recipe does not decode");
            DbError::Corrupt(format!("drink {}: {e}", row.id))
        })?;

        Ok(Drink {
            id: DrinkId(row.id),
            title: row.title,
            recipe,
        })
    }
}
