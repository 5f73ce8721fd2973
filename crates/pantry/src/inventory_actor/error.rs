//! Error types for the Inventory actor.

use thiserror::Error;

/// Errors that can occur during inventory operations.
///
/// Running short of stock is not an error: [`remove_quantity`](crate::clients::InventoryClient::remove_quantity)
/// reports it as `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A removal was requested with a negative or non-finite quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
