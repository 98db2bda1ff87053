//! Drink catalog handlers
//!
//! Every handler here sits behind a `PermissionLayer`; the claims it
//! receives have already passed the route's permission check.

use std::time::Instant;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use roastery_axum::Authorized;
use roastery_db::{DrinkChanges, NewDrink};
use roastery_types::{
    validate_recipe, validate_title, DeletedResponse, Drink, DrinkError, DrinkId, DrinkShort,
    DrinksResponse, RecipeInput,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ApiError, ApiResult};
use crate::handlers::record_op_duration;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateDrinkRequest {
    pub title: String,
    pub recipe: RecipeInput,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDrinkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<RecipeInput>,
}

impl CreateDrinkRequest {
    fn validate(self) -> Result<NewDrink, DrinkError> {
        let title = validate_title(&self.title)?;
        let recipe = self.recipe.into_vec();
        validate_recipe(&recipe)?;
        Ok(NewDrink { title, recipe })
    }
}

impl UpdateDrinkRequest {
    fn validate(self) -> Result<DrinkChanges, DrinkError> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let recipe = self.recipe.map(RecipeInput::into_vec);
        if let Some(recipe) = &recipe {
            validate_recipe(recipe)?;
        }

        let changes = DrinkChanges { title, recipe };
        if changes.is_empty() {
            return Err(DrinkError::EmptyUpdate);
        }
        Ok(changes)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /drinks
#[instrument(skip_all, fields(subject = ?claims.subject()))]
pub async fn list_drinks(
    claims: Authorized,
    State(state): State<AppState>,
) -> ApiResult<Json<DrinksResponse<DrinkShort>>> {
    let start = Instant::now();
    let result = state.drinks.list().await;
    record_op_duration("list_drinks", start, result.is_ok());

    let drinks = result?.iter().map(Drink::short).collect();
    Ok(Json(DrinksResponse::new(drinks)))
}

/// GET /drinks-detail
#[instrument(skip_all, fields(subject = ?claims.subject()))]
pub async fn list_drinks_detail(
    claims: Authorized,
    State(state): State<AppState>,
) -> ApiResult<Json<DrinksResponse<Drink>>> {
    let start = Instant::now();
    let result = state.drinks.list().await;
    record_op_duration("list_drinks_detail", start, result.is_ok());

    let drinks = result?.into_iter().map(Drink::long).collect();
    Ok(Json(DrinksResponse::new(drinks)))
}

/// POST /drinks
#[instrument(skip_all, fields(subject = ?claims.subject(), drink_id))]
pub async fn create_drink(
    claims: Authorized,
    State(state): State<AppState>,
    body: Result<Json<CreateDrinkRequest>, JsonRejection>,
) -> ApiResult<Json<DrinksResponse<Drink>>> {
    let Json(req) = body?;
    let new_drink = req.validate()?;

    let start = Instant::now();
    let result = state.drinks.create(new_drink).await;
    record_op_duration("create_drink", start, result.is_ok());

    let drink = result?;
    tracing::Span::current().record("drink_id", drink.id.0);
    tracing::info!(title = %drink.title, "Drink created");

    Ok(Json(DrinksResponse::new(vec![drink])))
}

/// PATCH /drinks/{id}
#[instrument(skip_all, fields(subject = ?claims.subject(), drink_id))]
pub async fn update_drink(
    claims: Authorized,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateDrinkRequest>, JsonRejection>,
) -> ApiResult<Json<DrinksResponse<Drink>>> {
    let Path(id) = id?;
    tracing::Span::current().record("drink_id", id);

    let Json(req) = body?;
    let changes = req.validate()?;

    let start = Instant::now();
    let result = state.drinks.update(DrinkId(id), changes).await;
    record_op_duration("update_drink", start, result.is_ok());

    let drink = result?;
    tracing::info!(title = %drink.title, "Drink updated");

    Ok(Json(DrinksResponse::new(vec![drink])))
}

/// DELETE /drinks/{id}
#[instrument(skip_all, fields(subject = ?claims.subject(), drink_id))]
pub async fn delete_drink(
    claims: Authorized,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<DeletedResponse>> {
    let Path(id) = id?;
    tracing::Span::current().record("drink_id", id);

    let start = Instant::now();
    let result = state.drinks.delete(DrinkId(id)).await;
    record_op_duration("delete_drink", start, result.is_ok());

    if !result? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Drink deleted");

    Ok(Json(DeletedResponse::new(DrinkId(id))))
}
