//! # Pantry
//!
//! Inventory of perishable groceries and a recipe catalog that knows what can be cooked
//! from it.
//!
//! ## Core Components
//!
//! - **[model]**: the plain-data engines. [`FoodStorage`](model::FoodStorage) keeps lots
//!   per item name, merges identical lots, and depletes oldest-first;
//!   [`Cookbook`](model::Cookbook) holds recipes in insertion order.
//! - **[rules]** and **[feasibility]**: expiry, value, merge eligibility, and recipe matching.
//! - **[inventory_actor]** / **[cookbook_actor]**: each engine served by a
//!   [`ResourceActor`](resource_actor::ResourceActor) so concurrent callers are serialized.
//! - **[clients]**: typed wrappers such as [`InventoryClient`](clients::InventoryClient).
//! - **[lifecycle]**: [`KitchenSystem`](lifecycle::KitchenSystem) wires and stops the actors.
//! - **[config]** and **[clock]**: settings from TOML, and the injectable "today".
//!
//! ## Testing
//!
//! The engines are tested synchronously in place. Clients are tested against
//! [`resource_actor::mock`], and `tests/` runs the real actors.

pub mod clients;
pub mod clock;
pub mod config;
pub mod cookbook_actor;
pub mod feasibility;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod rules;
