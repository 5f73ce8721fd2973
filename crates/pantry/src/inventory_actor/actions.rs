//! Requests understood by the Inventory actor.
//!
//! Actions mutate the [`FoodStorage`](crate::model::FoodStorage); queries only read it.
//! Each result enum has one variant per request, named the same.

use crate::model::{Grocery, LotPlacement};

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Stores a lot, merging it with a clubbable one when possible.
    AddLot(Grocery),
    /// Removes a quantity of an item, oldest lots first, all or nothing.
    RemoveQuantity { name: String, quantity: f64 },
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone)]
pub enum InventoryActionResult {
    AddLot(LotPlacement),
    /// `false` if the item is unknown or there is not enough of it.
    RemoveQuantity(bool),
}

/// Read-only requests. Expiry is judged against the actor's clock.
#[derive(Debug, Clone)]
pub enum InventoryQuery {
    AllLots,
    ExpiredLots,
    TotalValue,
    TotalExpiredValue,
}

/// Results from InventoryQueries - variants match 1:1 with InventoryQuery
#[derive(Debug, Clone)]
pub enum InventoryQueryResult {
    AllLots(Vec<Grocery>),
    ExpiredLots(Vec<Grocery>),
    TotalValue(f64),
    TotalExpiredValue(f64),
}
