//! [`ActorResource`] implementation for [`FoodStorage`].
//!
//! The actor's context is the [`SharedClock`]: expiry queries ask it for today's date on
//! every request, so a long-running actor never works from a stale date.

use super::actions::{
    InventoryAction, InventoryActionResult, InventoryQuery, InventoryQueryResult,
};
use super::error::InventoryError;
use crate::clock::SharedClock;
use crate::model::FoodStorage;
use async_trait::async_trait;
use resource_actor::ActorResource;
use tracing::debug;

#[async_trait]
impl ActorResource for FoodStorage {
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Query = InventoryQuery;
    type QueryResult = InventoryQueryResult;
    type Context = SharedClock;
    type Error = InventoryError;

    /// Handles the mutating requests.
    ///
    /// # Actions
    /// - `AddLot`: merge-or-append, reports which happened
    /// - `RemoveQuantity`: oldest-first depletion; `false` leaves the storage untouched
    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _clock: &SharedClock,
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::AddLot(lot) => {
                let placement = self.add_lot(lot);
                Ok(InventoryActionResult::AddLot(placement))
            }
            InventoryAction::RemoveQuantity { name, quantity } => {
                if !quantity.is_finite() || quantity < 0.0 {
                    return Err(InventoryError::InvalidQuantity(quantity));
                }
                let removed = self.remove_quantity(&name, quantity);
                if !removed {
                    debug!(%name, quantity, "Not enough stock, nothing removed");
                }
                Ok(InventoryActionResult::RemoveQuantity(removed))
            }
        }
    }

    async fn handle_query(
        &self,
        query: InventoryQuery,
        clock: &SharedClock,
    ) -> Result<InventoryQueryResult, InventoryError> {
        let result = match query {
            InventoryQuery::AllLots => InventoryQueryResult::AllLots(self.all_lots()),
            InventoryQuery::ExpiredLots => {
                InventoryQueryResult::ExpiredLots(self.expired_lots(clock.today()))
            }
            InventoryQuery::TotalValue => InventoryQueryResult::TotalValue(self.total_value()),
            InventoryQuery::TotalExpiredValue => {
                InventoryQueryResult::TotalExpiredValue(self.total_expired_value(clock.today()))
            }
        };
        Ok(result)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
