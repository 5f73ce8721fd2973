//! # Cookbook Client
//!
//! Provides a high‑level API for interacting with the Cookbook actor.
use crate::cookbook_actor::{
    CookbookAction, CookbookActionResult, CookbookError, CookbookQuery, CookbookQueryResult,
};
use crate::feasibility::ExpiryPolicy;
use crate::model::{Cookbook, Grocery, Recipe, RecipeCreate, RecipeId, RecipeUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Cookbook actor.
#[derive(Clone)]
pub struct CookbookClient {
    inner: ResourceClient<Cookbook>,
}

impl CookbookClient {
    pub fn new(inner: ResourceClient<Cookbook>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cookbook> for CookbookClient {
    type Error = CookbookError;

    fn inner(&self) -> &ResourceClient<Cookbook> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_resource::<CookbookError>()
            .unwrap_or_else(|e| CookbookError::ActorCommunicationError(e.to_string()))
    }
}

impl CookbookClient {
    #[instrument(skip(self, params), fields(name = %params.name()))]
    pub async fn add_recipe(&self, params: RecipeCreate) -> Result<RecipeId, CookbookError> {
        debug!("Adding recipe");
        match self.perform(CookbookAction::AddRecipe(params)).await? {
            CookbookActionResult::AddRecipe(id) => Ok(id),
            _ => unreachable!("AddRecipe action must return AddRecipe result"),
        }
    }

    /// Applies `update` and returns the recipe as it now reads.
    ///
    /// # Errors
    /// [`CookbookError::Recipe`] with `NotFound` for an unknown id, or with the validation
    /// error of the first bad field, in which case the recipe is left unchanged.
    #[instrument(skip(self))]
    pub async fn update_recipe(
        &self,
        id: RecipeId,
        update: RecipeUpdate,
    ) -> Result<Recipe, CookbookError> {
        match self.perform(CookbookAction::UpdateRecipe { id, update }).await? {
            CookbookActionResult::UpdateRecipe(recipe) => Ok(recipe),
            _ => unreachable!("UpdateRecipe action must return UpdateRecipe result"),
        }
    }

    pub async fn all_recipes(&self) -> Result<Vec<Recipe>, CookbookError> {
        match self.ask(CookbookQuery::AllRecipes).await? {
            CookbookQueryResult::AllRecipes(recipes) => Ok(recipes),
            _ => unreachable!("AllRecipes query must return AllRecipes result"),
        }
    }

    pub async fn recipe(&self, id: RecipeId) -> Result<Option<Recipe>, CookbookError> {
        match self.ask(CookbookQuery::Recipe(id)).await? {
            CookbookQueryResult::Recipe(recipe) => Ok(recipe),
            _ => unreachable!("Recipe query must return Recipe result"),
        }
    }

    /// Recipes cookable from the given lots.
    #[instrument(skip(self, lots), fields(lots = lots.len()))]
    pub async fn possible_recipes(
        &self,
        lots: Vec<Grocery>,
        policy: ExpiryPolicy,
    ) -> Result<Vec<Recipe>, CookbookError> {
        match self.ask(CookbookQuery::PossibleRecipes { lots, policy }).await? {
            CookbookQueryResult::PossibleRecipes(recipes) => Ok(recipes),
            _ => unreachable!("PossibleRecipes query must return PossibleRecipes result"),
        }
    }

    /// Recipes cookable from whatever the inventory holds right now.
    #[instrument(skip(self))]
    pub async fn cookable_now(&self, policy: ExpiryPolicy) -> Result<Vec<Recipe>, CookbookError> {
        match self.ask(CookbookQuery::CookableNow { policy }).await? {
            CookbookQueryResult::CookableNow(recipes) => Ok(recipes),
            _ => unreachable!("CookableNow query must return CookableNow result"),
        }
    }
}
