//! # Resource Actor
//!
//! Building blocks for serving a stateful store through the **Actor Model** on Tokio.
//!
//! A store (an inventory, a recipe catalog, ...) is written as plain single-threaded Rust and
//! implements [`ActorResource`]. A [`ResourceActor`] then owns it inside one task and serves
//! requests sent through cloneable [`ResourceClient`]s. Callers may be concurrent; the store
//! never is.
//!
//! ## Architecture Overview
//!
//! 1. **Resource Layer** ([`ActorResource`]) - your state and its business rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - mailbox, sequential processing, logging
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! Requests come in two kinds: **actions** (`&mut self`, may change state) and **queries**
//! (`&self`, read-only). Each resource defines its own request and result enums, so the
//! compiler rejects sending a catalog query to an inventory actor.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at construction.
//! An actor can therefore hold a client of another actor that was created after it:
//!
//! ```rust
//! use resource_actor::{ActorResource, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Debug, Default)] struct Stock { units: u32 }
//! #[derive(Debug)] enum StockAction { Receive(u32) }
//! #[derive(Debug)] enum StockQuery { Units }
//! #[derive(Debug, thiserror::Error)] #[error("stock error")] struct StockError;
//!
//! #[async_trait]
//! impl ActorResource for Stock {
//!     type Action = StockAction; type ActionResult = ();
//!     type Query = StockQuery; type QueryResult = u32;
//!     type Context = (); type Error = StockError;
//!     async fn handle_action(&mut self, a: StockAction, _: &()) -> Result<(), StockError> {
//!         match a { StockAction::Receive(n) => self.units += n }
//!         Ok(())
//!     }
//!     async fn handle_query(&self, _: StockQuery, _: &()) -> Result<u32, StockError> {
//!         Ok(self.units)
//!     }
//! }
//!
//! // A planner that asks the stock actor before answering.
//! #[derive(Debug, Default)] struct Planner;
//! #[derive(Debug)] enum PlannerAction {}
//! #[derive(Debug)] enum PlannerQuery { CanBake(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("planner error")] struct PlannerError;
//!
//! #[async_trait]
//! impl ActorResource for Planner {
//!     type Action = PlannerAction; type ActionResult = ();
//!     type Query = PlannerQuery; type QueryResult = bool;
//!     type Context = ResourceClient<Stock>; type Error = PlannerError;
//!     async fn handle_action(&mut self, a: PlannerAction, _: &Self::Context) -> Result<(), PlannerError> {
//!         match a {}
//!     }
//!     async fn handle_query(&self, q: PlannerQuery, stock: &Self::Context) -> Result<bool, PlannerError> {
//!         let PlannerQuery::CanBake(needed) = q;
//!         let units = stock.query(StockQuery::Units).await.map_err(|_| PlannerError)?;
//!         Ok(units >= needed)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (stock_actor, stock) = ResourceActor::new(Stock::default(), 8);
//!     let (planner_actor, planner) = ResourceActor::new(Planner, 8);
//!
//!     tokio::spawn(stock_actor.run(()));
//!     tokio::spawn(planner_actor.run(stock.clone()));
//!
//!     stock.perform_action(StockAction::Receive(5)).await.unwrap();
//!     assert!(planner.query(PlannerQuery::CanBake(4)).await.unwrap());
//!     assert!(!planner.query(PlannerQuery::CanBake(6)).await.unwrap());
//! }
//! ```
//!
//! ## Shutdown
//!
//! An actor stops when the last client clone is dropped. When actors hold each other's
//! clients in their context, the dependency graph must stay acyclic for this to terminate.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient) and raw channel helpers for
//! testing code around a client without running the resource behind it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod resource;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use resource::ActorResource;
