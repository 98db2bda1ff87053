//! Drink types

use serde::{Deserialize, Serialize};

use crate::error::DrinkError;

/// Maximum title length (matches the `drinks.title` column)
pub const MAX_TITLE_LEN: usize = 80;

/// Storage-assigned drink identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrinkId(pub i32);

impl std::fmt::Display for DrinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DrinkId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// One line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, color: impl Into<String>, parts: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            parts,
        }
    }
}

/// Ingredient as shown in the public listing (no names)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// A drink in the catalog.
///
/// Serializes as the long representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: DrinkId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Short representation: recipe colors and proportions only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkShort {
    pub id: DrinkId,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

impl Drink {
    /// Public view of the drink
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| ShortIngredient {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }

    /// Detailed view of the drink (consumes it, the long form is the drink itself)
    pub fn long(self) -> Drink {
        self
    }
}

/// Recipe as accepted from clients: a single ingredient or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    One(Ingredient),
    Many(Vec<Ingredient>),
}

impl RecipeInput {
    pub fn into_vec(self) -> Vec<Ingredient> {
        match self {
            Self::One(ingredient) => vec![ingredient],
            Self::Many(list) => list,
        }
    }
}

/// Validate and normalize a drink title
pub fn validate_title(title: &str) -> Result<String, DrinkError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DrinkError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DrinkError::TitleTooLong { max: MAX_TITLE_LEN });
    }
    Ok(title.to_string())
}

/// Validate a recipe
pub fn validate_recipe(recipe: &[Ingredient]) -> Result<(), DrinkError> {
    if recipe.is_empty() {
        return Err(DrinkError::EmptyRecipe);
    }
    for (index, ingredient) in recipe.iter().enumerate() {
        if ingredient.name.trim().is_empty() {
            return Err(DrinkError::MissingIngredientField { index, field: "name" });
        }
        if ingredient.color.trim().is_empty() {
            return Err(DrinkError::MissingIngredientField { index, field: "color" });
        }
        if ingredient.parts == 0 {
            return Err(DrinkError::ZeroParts { index });
        }
    }
    Ok(())
}
