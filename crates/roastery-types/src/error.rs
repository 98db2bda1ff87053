//! Domain validation errors

use thiserror::Error;

/// Reasons a drink payload is rejected before it reaches storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrinkError {
    /// Title is empty or whitespace
    #[error("title must not be empty")]
    EmptyTitle,

    /// Title exceeds the column width
    #[error("title too long (max {max} chars)")]
    TitleTooLong { max: usize },

    /// Recipe has no ingredients
    #[error("recipe must contain at least one ingredient")]
    EmptyRecipe,

    /// Ingredient field is empty
    #[error("ingredient {index} is missing a {field}")]
    MissingIngredientField { index: usize, field: &'static str },

    /// Ingredient with zero parts
    #[error("ingredient {index} must have at least one part")]
    ZeroParts { index: usize },

    /// Update request with nothing to change
    #[error("nothing to update: provide a title or a recipe")]
    EmptyUpdate,
}
