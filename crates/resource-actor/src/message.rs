//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient) and its
//! [`ResourceActor`](crate::ResourceActor).

use crate::error::FrameworkError;
use crate::resource::ActorResource;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message sent to the actor.
///
/// The variants are generic over `R: ActorResource` and use its associated request and
/// result types, so an inventory request can never be delivered to a catalog actor.
///
/// - **Action**: mutate the resource, answered with `R::ActionResult`.
/// - **Query**: read the resource, answered with `R::QueryResult`.
#[derive(Debug)]
pub enum ResourceRequest<R: ActorResource> {
    Action {
        action: R::Action,
        respond_to: Response<R::ActionResult>,
    },
    Query {
        query: R::Query,
        respond_to: Response<R::QueryResult>,
    },
}
