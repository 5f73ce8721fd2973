//! Recipes held by the [`Cookbook`](crate::model::Cookbook).
//!
//! Callers build a validated [`RecipeCreate`]; the cookbook turns it into a [`Recipe`] by
//! assigning the next [`RecipeId`]. Later edits go through [`RecipeUpdate`] or the explicit
//! setters on [`Recipe`], never through field-by-name mutation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

/// Ingredient name to required quantity.
pub type Ingredients = BTreeMap<String, f64>;

/// Type-safe identifier for Recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub u32);

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recipe_{}", self.0)
    }
}

/// Validation and lookup failures for recipes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecipeError {
    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Ingredient name cannot be empty")]
    EmptyIngredientName,

    #[error("Invalid quantity {quantity} for ingredient {ingredient}")]
    InvalidIngredientQuantity { ingredient: String, quantity: f64 },

    #[error("A recipe must serve at least one person")]
    InvalidServings,

    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    description: String,
    procedure: String,
    ingredients: Ingredients,
    serves: u32,
}

impl Recipe {
    pub(crate) fn from_create(id: RecipeId, params: RecipeCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            procedure: params.procedure,
            ingredients: params.ingredients,
            serves: params.serves,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn procedure(&self) -> &str {
        &self.procedure
    }

    pub fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }

    pub fn serves(&self) -> u32 {
        self.serves
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), RecipeError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn redescribe(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn rewrite_procedure(&mut self, procedure: impl Into<String>) {
        self.procedure = procedure.into();
    }

    pub fn replace_ingredients(&mut self, ingredients: Ingredients) -> Result<(), RecipeError> {
        check_ingredients(&ingredients)?;
        self.ingredients = ingredients;
        Ok(())
    }

    pub fn set_serves(&mut self, serves: u32) -> Result<(), RecipeError> {
        check_serves(serves)?;
        self.serves = serves;
        Ok(())
    }

    /// Applies every field present in `update`.
    ///
    /// All present fields are validated first, so a rejected update leaves the recipe as it
    /// was.
    pub fn apply(&mut self, update: RecipeUpdate) -> Result<(), RecipeError> {
        update.validate()?;
        let RecipeUpdate {
            name,
            description,
            procedure,
            ingredients,
            serves,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.redescribe(description);
        }
        if let Some(procedure) = procedure {
            self.rewrite_procedure(procedure);
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        if let Some(serves) = serves {
            self.serves = serves;
        }
        Ok(())
    }
}

impl Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Payload for adding a recipe to the cookbook. Validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCreate {
    name: String,
    description: String,
    procedure: String,
    ingredients: Ingredients,
    serves: u32,
}

impl RecipeCreate {
    /// # Errors
    /// Fails on an empty recipe or ingredient name, a non-positive or non-finite ingredient
    /// quantity, or zero servings.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        procedure: impl Into<String>,
        ingredients: Ingredients,
        serves: u32,
    ) -> Result<Self, RecipeError> {
        let name = name.into();
        check_name(&name)?;
        check_ingredients(&ingredients)?;
        check_serves(serves)?;
        Ok(Self {
            name,
            description: description.into(),
            procedure: procedure.into(),
            ingredients,
            serves,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Payload for editing a recipe. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub procedure: Option<String>,
    pub ingredients: Option<Ingredients>,
    pub serves: Option<u32>,
}

impl RecipeUpdate {
    pub fn validate(&self) -> Result<(), RecipeError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(ingredients) = &self.ingredients {
            check_ingredients(ingredients)?;
        }
        if let Some(serves) = self.serves {
            check_serves(serves)?;
        }
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), RecipeError> {
    if name.trim().is_empty() {
        return Err(RecipeError::EmptyName);
    }
    Ok(())
}

fn check_ingredients(ingredients: &Ingredients) -> Result<(), RecipeError> {
    for (ingredient, &quantity) in ingredients {
        if ingredient.is_empty() {
            return Err(RecipeError::EmptyIngredientName);
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(RecipeError::InvalidIngredientQuantity {
                ingredient: ingredient.clone(),
                quantity,
            });
        }
    }
    Ok(())
}

fn check_serves(serves: u32) -> Result<(), RecipeError> {
    if serves == 0 {
        return Err(RecipeError::InvalidServings);
    }
    Ok(())
}
