//! Error types for the Cookbook actor.

use crate::inventory_actor::InventoryError;
use crate::model::RecipeError;
use thiserror::Error;

/// Errors that can occur during cookbook operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CookbookError {
    /// A recipe failed validation or does not exist.
    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),

    /// The inventory could not be read while checking what is cookable.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
