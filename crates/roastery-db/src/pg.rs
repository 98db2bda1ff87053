//! PostgreSQL drink repository implementation

use async_trait::async_trait;
use roastery_types::{Drink, DrinkId};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::DrinkRow;
use crate::repo::{seed_drinks, DrinkChanges, DrinkRepository, NewDrink};

/// PostgreSQL drink repository
#[derive(Clone)]
pub struct PgDrinkRepository {
    pool: PgPool,
}

impl PgDrinkRepository {
    /// Create a new drink repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `drinks` table if it does not exist
    pub async fn ensure_schema(&self) -> DbResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS drinks (
                id     SERIAL PRIMARY KEY,
                title  VARCHAR(80) UNIQUE NOT NULL,
                recipe JSONB NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Drop and recreate the `drinks` table, then insert the seed drinks
    pub async fn reset(&self) -> DbResult<()> {
        tracing::warn!("Resetting drinks table");

        sqlx::query("DROP TABLE IF EXISTS drinks")
            .execute(&self.pool)
            .await?;
        self.ensure_schema().await?;

        for drink in seed_drinks() {
            self.create(drink).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DrinkRepository for PgDrinkRepository {
    async fn list(&self) -> DbResult<Vec<Drink>> {
        let rows = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Drink::try_from).collect()
    }

    async fn find_by_id(&self, id: DrinkId) -> DbResult<Option<Drink>> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Drink::try_from).transpose()
    }

    async fn create(&self, drink: NewDrink) -> DbResult<Drink> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            INSERT INTO drinks (title, recipe)
            VALUES ($1, $2)
            RETURNING id, title, recipe
            "#,
        )
        .bind(&drink.title)
        .bind(Json(&drink.recipe))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, &drink.title))?;

        Drink::try_from(row)
    }

    async fn update(&self, id: DrinkId, changes: DrinkChanges) -> DbResult<Drink> {
        let title = changes.title.as_deref().unwrap_or_default();
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            UPDATE drinks
            SET title  = COALESCE($2, title),
                recipe = COALESCE($3, recipe)
            WHERE id = $1
            RETURNING id, title, recipe
            "#,
        )
        .bind(id.0)
        .bind(changes.title.as_deref())
        .bind(changes.recipe.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, title))?;

        row.map(Drink::try_from).transpose()?.ok_or(DbError::NotFound)
    }

    async fn delete(&self, id: DrinkId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
