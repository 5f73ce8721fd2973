//! # Inventory Client
//!
//! Provides a high‑level API for interacting with the Inventory actor.
//! It wraps a `ResourceClient<FoodStorage>` and exposes domain‑specific methods.
use crate::inventory_actor::{
    InventoryAction, InventoryActionResult, InventoryError, InventoryQuery, InventoryQueryResult,
};
use crate::model::{FoodStorage, Grocery, LotPlacement};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<FoodStorage>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<FoodStorage>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<FoodStorage> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<FoodStorage> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_resource::<InventoryError>()
            .unwrap_or_else(|e| InventoryError::ActorCommunicationError(e.to_string()))
    }
}

impl InventoryClient {
    /// Stores a lot. Reports whether it was merged into an existing lot or appended.
    #[instrument(skip(self), fields(name = %lot.name()))]
    pub async fn add_lot(&self, lot: Grocery) -> Result<LotPlacement, InventoryError> {
        debug!("Adding lot");
        match self.perform(InventoryAction::AddLot(lot)).await? {
            InventoryActionResult::AddLot(placement) => Ok(placement),
            _ => unreachable!("AddLot action must return AddLot result"),
        }
    }

    /// Removes `quantity` of `name`, oldest lots first.
    ///
    /// Returns `Ok(false)` and changes nothing if the item is unknown or short.
    ///
    /// # Errors
    /// [`InventoryError::InvalidQuantity`] for a negative or non-finite quantity.
    #[instrument(skip(self))]
    pub async fn remove_quantity(&self, name: &str, quantity: f64) -> Result<bool, InventoryError> {
        debug!("Removing {} of {}", quantity, name);
        let action = InventoryAction::RemoveQuantity {
            name: name.to_string(),
            quantity,
        };
        match self.perform(action).await? {
            InventoryActionResult::RemoveQuantity(removed) => Ok(removed),
            _ => unreachable!("RemoveQuantity action must return RemoveQuantity result"),
        }
    }

    pub async fn all_lots(&self) -> Result<Vec<Grocery>, InventoryError> {
        match self.ask(InventoryQuery::AllLots).await? {
            InventoryQueryResult::AllLots(lots) => Ok(lots),
            _ => unreachable!("AllLots query must return AllLots result"),
        }
    }

    pub async fn expired_lots(&self) -> Result<Vec<Grocery>, InventoryError> {
        match self.ask(InventoryQuery::ExpiredLots).await? {
            InventoryQueryResult::ExpiredLots(lots) => Ok(lots),
            _ => unreachable!("ExpiredLots query must return ExpiredLots result"),
        }
    }

    pub async fn total_value(&self) -> Result<f64, InventoryError> {
        match self.ask(InventoryQuery::TotalValue).await? {
            InventoryQueryResult::TotalValue(value) => Ok(value),
            _ => unreachable!("TotalValue query must return TotalValue result"),
        }
    }

    pub async fn total_expired_value(&self) -> Result<f64, InventoryError> {
        match self.ask(InventoryQuery::TotalExpiredValue).await? {
            InventoryQueryResult::TotalExpiredValue(value) => Ok(value),
            _ => unreachable!("TotalExpiredValue query must return TotalExpiredValue result"),
        }
    }
}
