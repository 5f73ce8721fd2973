//! # Cookbook Actor
//!
//! Serves the recipe [`Cookbook`] through a [`ResourceActor`]. Besides catalog upkeep it
//! answers "what can I cook?", either against lots the caller passes in or against the
//! live inventory reached through [`CookbookContext`].
//!
//! ## Structure
//!
//! - [`resource`] - [`ActorResource`](resource_actor::ActorResource) implementation for [`Cookbook`], and [`CookbookContext`]
//! - [`error`] - [`CookbookError`]
//! - [`actions`] - [`CookbookAction`] / [`CookbookQuery`] and their result enums
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod error;
pub mod resource;

pub use actions::*;
pub use error::*;
pub use resource::CookbookContext;

use crate::model::Cookbook;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Cookbook actor over an empty catalog, and its client.
///
/// # Panics
/// If `channel_capacity` is zero. [`RuntimeConfig::validate`](crate::config::RuntimeConfig::validate)
/// rejects that value up front.
pub fn new(channel_capacity: usize) -> (ResourceActor<Cookbook>, ResourceClient<Cookbook>) {
    ResourceActor::new(Cookbook::new(), channel_capacity)
}
