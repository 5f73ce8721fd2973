//! # Inventory Actor
//!
//! Serves the [`FoodStorage`] through a [`ResourceActor`], so any number of callers can add
//! and remove stock concurrently without ever observing a half-applied removal.
//!
//! ## Structure
//!
//! - [`resource`] - [`ActorResource`](resource_actor::ActorResource) implementation for [`FoodStorage`]
//! - [`error`] - [`InventoryError`] type for type-safe error handling
//! - [`actions`] - [`InventoryAction`] / [`InventoryQuery`] and their result enums
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pantry::clients::InventoryClient;
//! use pantry::clock::FixedClock;
//! use pantry::inventory_actor;
//! use pantry::model::Grocery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//!     let (actor, generic_client) = inventory_actor::new(32);
//!     let client = InventoryClient::new(generic_client);
//!
//!     // The clock is the actor's only dependency
//!     tokio::spawn(actor.run(FixedClock::shared(today)));
//!
//!     let expiry = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
//!     client.add_lot(Grocery::new("Milk", 2.0, "liters", 15.0, expiry)?).await?;
//!
//!     assert!(client.remove_quantity("Milk", 0.5).await?);
//!     assert!(!client.remove_quantity("Milk", 5.0).await?);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod resource;

pub use actions::*;
pub use error::*;

use crate::model::FoodStorage;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Inventory actor over an empty storage, and its client.
///
/// # Panics
/// If `channel_capacity` is zero. [`RuntimeConfig::validate`](crate::config::RuntimeConfig::validate)
/// rejects that value up front.
pub fn new(channel_capacity: usize) -> (ResourceActor<FoodStorage>, ResourceClient<FoodStorage>) {
    ResourceActor::new(FoodStorage::new(), channel_capacity)
}
