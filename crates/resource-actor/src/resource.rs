//! # ActorResource Trait
//!
//! The `ActorResource` trait is the contract a stateful store (an inventory, a catalog, ...)
//! implements to be owned by a [`ResourceActor`](crate::ResourceActor). The actor holds exactly
//! one resource and feeds it requests one at a time, so the resource itself is plain,
//! single-threaded data with no locking.
//!
//! # Actions vs Queries
//! Requests are split in two families:
//! - **Actions** mutate the resource (`&mut self`). They are logged at `info` on success.
//! - **Queries** only read it (`&self`). They are logged at `debug`.
//!
//! Both are enums defined by the resource, with a matching result enum whose variants
//! line up 1:1 with the request variants.
//!
//! # Provided Methods (Hooks)
//! - [`ActorResource::on_start`] runs once before the first request is served.
//! - [`ActorResource::size`] feeds the `size` field of the actor's log lines.
//!
//! Both default to doing nothing interesting.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any store must implement to be served by a `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so handlers can await other actors. The `Context` type is
/// injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run), which lets
/// dependencies (clocks, clients of other actors) be bound late, after every actor exists.
#[async_trait]
pub trait ActorResource: Send + Sync + 'static {
    /// Mutating request understood by this resource.
    type Action: Send + Sync + Debug;

    /// Result of a mutating request.
    type ActionResult: Send + Sync + Debug;

    /// Read-only request understood by this resource.
    type Query: Send + Sync + Debug;

    /// Result of a read-only request.
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this resource.
    ///
    /// One enum per resource rather than one per request: callers match on a single type,
    /// at the price of some variants being unreachable for a given request.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once, before the first request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a mutating request.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Answer a read-only request.
    async fn handle_query(
        &self,
        query: Self::Query,
        ctx: &Self::Context,
    ) -> Result<Self::QueryResult, Self::Error>;

    /// Number of items held, reported in log lines.
    fn size(&self) -> usize {
        0
    }
}
