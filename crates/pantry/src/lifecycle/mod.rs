//! # System Lifecycle
//!
//! Creating, wiring and stopping the pantry's actors, plus logging setup.
//!
//! Actors are created without dependencies and receive them through `run(context)`:
//!
//! - the inventory actor gets the [`SharedClock`](crate::clock::SharedClock)
//! - the cookbook actor gets a [`CookbookContext`](crate::cookbook_actor::CookbookContext)
//!   holding the clock and a clone of the inventory client
//!
//! The dependency graph is acyclic, so shutdown needs no explicit stop message: once every
//! client is dropped, each actor's mailbox closes and its loop ends.

pub mod kitchen_system;
pub mod tracing;

pub use kitchen_system::*;
pub use self::tracing::setup_tracing;
