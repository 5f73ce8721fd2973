//! [`ActorResource`] implementation for [`Cookbook`].
//!
//! The cookbook depends on the inventory for [`CookbookQuery::CookableNow`]. The inventory
//! client arrives through [`CookbookContext`] when the actor is started, so the two actors
//! can be created in any order.

use super::actions::{CookbookAction, CookbookActionResult, CookbookQuery, CookbookQueryResult};
use super::error::CookbookError;
use crate::clients::InventoryClient;
use crate::clock::SharedClock;
use crate::model::Cookbook;
use async_trait::async_trait;
use resource_actor::ActorResource;
use tracing::debug;

/// Dependencies injected into the Cookbook actor at startup.
#[derive(Clone)]
pub struct CookbookContext {
    pub clock: SharedClock,
    pub inventory: InventoryClient,
}

#[async_trait]
impl ActorResource for Cookbook {
    type Action = CookbookAction;
    type ActionResult = CookbookActionResult;
    type Query = CookbookQuery;
    type QueryResult = CookbookQueryResult;
    type Context = CookbookContext;
    type Error = CookbookError;

    async fn handle_action(
        &mut self,
        action: CookbookAction,
        _ctx: &CookbookContext,
    ) -> Result<CookbookActionResult, CookbookError> {
        match action {
            CookbookAction::AddRecipe(params) => {
                Ok(CookbookActionResult::AddRecipe(self.add_recipe(params)))
            }
            CookbookAction::UpdateRecipe { id, update } => {
                let recipe = self.update_recipe(id, update)?;
                Ok(CookbookActionResult::UpdateRecipe(recipe.clone()))
            }
        }
    }

    /// Handles the read-only requests.
    ///
    /// # Queries
    /// - `PossibleRecipes`: matches against the lots given in the request
    /// - `CookableNow`: fetches all lots from the inventory actor first, then matches
    async fn handle_query(
        &self,
        query: CookbookQuery,
        ctx: &CookbookContext,
    ) -> Result<CookbookQueryResult, CookbookError> {
        let result = match query {
            CookbookQuery::AllRecipes => {
                CookbookQueryResult::AllRecipes(self.all_recipes().to_vec())
            }
            CookbookQuery::Recipe(id) => CookbookQueryResult::Recipe(self.recipe(id).cloned()),
            CookbookQuery::PossibleRecipes { lots, policy } => CookbookQueryResult::PossibleRecipes(
                self.possible_recipes(&lots, policy, ctx.clock.today()),
            ),
            CookbookQuery::CookableNow { policy } => {
                let lots = ctx.inventory.all_lots().await?;
                debug!(lots = lots.len(), ?policy, "Matching recipes against inventory");
                CookbookQueryResult::CookableNow(self.possible_recipes(
                    &lots,
                    policy,
                    ctx.clock.today(),
                ))
            }
        };
        Ok(result)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
