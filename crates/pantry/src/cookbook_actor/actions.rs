//! Requests understood by the Cookbook actor.

use crate::feasibility::ExpiryPolicy;
use crate::model::{Grocery, Recipe, RecipeCreate, RecipeId, RecipeUpdate};

#[derive(Debug, Clone)]
pub enum CookbookAction {
    /// Adds a recipe under the next free id.
    AddRecipe(RecipeCreate),
    /// Edits an existing recipe. Nothing changes if any present field is invalid.
    UpdateRecipe { id: RecipeId, update: RecipeUpdate },
}

/// Results from CookbookActions - variants match 1:1 with CookbookAction
#[derive(Debug, Clone)]
pub enum CookbookActionResult {
    AddRecipe(RecipeId),
    /// The recipe as it reads after the update.
    UpdateRecipe(Recipe),
}

#[derive(Debug, Clone)]
pub enum CookbookQuery {
    AllRecipes,
    Recipe(RecipeId),
    /// Feasibility against a caller-supplied snapshot of lots.
    PossibleRecipes {
        lots: Vec<Grocery>,
        policy: ExpiryPolicy,
    },
    /// Feasibility against the inventory as it is right now.
    CookableNow { policy: ExpiryPolicy },
}

/// Results from CookbookQueries - variants match 1:1 with CookbookQuery
#[derive(Debug, Clone)]
pub enum CookbookQueryResult {
    AllRecipes(Vec<Recipe>),
    Recipe(Option<Recipe>),
    PossibleRecipes(Vec<Recipe>),
    CookableNow(Vec<Recipe>),
}
