//! Typed clients for the pantry actors.
//!
//! Each wraps a generic [`ResourceClient`](resource_actor::ResourceClient) and exposes one
//! method per request, returning the actor's own error type.

pub mod cookbook_client;
pub mod inventory_client;

pub use cookbook_client::CookbookClient;
pub use inventory_client::InventoryClient;
