//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the "server" half of the Actor Model. It owns one
//! resource and processes requests sequentially, which gives the resource exclusive access to
//! its own state without any `Mutex`.

use crate::client::ResourceClient;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::resource::ActorResource;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that owns a single resource.
///
/// # Architecture Note
/// The actor owns the resource and the receiver end of the channel. Any number of
/// [`ResourceClient`]s may send to it concurrently; the loop serves them one at a time, so
/// mutations like "deplete this lot" are never interleaved.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(resource, capacity)` returns the actor and a client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the future returned by `run` on the Tokio runtime.
///
/// ```rust
/// use resource_actor::{ActorResource, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)]
/// struct Tally { total: u64 }
/// #[derive(Debug)] enum TallyAction { Add(u64) }
/// #[derive(Debug)] enum TallyQuery { Total }
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl ActorResource for Tally {
///     type Action = TallyAction;
///     type ActionResult = ();
///     type Query = TallyQuery;
///     type QueryResult = u64;
///     type Context = ();
///     type Error = TallyError;
///
///     async fn handle_action(&mut self, action: TallyAction, _: &()) -> Result<(), TallyError> {
///         match action { TallyAction::Add(n) => self.total += n }
///         Ok(())
///     }
///     async fn handle_query(&self, _: TallyQuery, _: &()) -> Result<u64, TallyError> {
///         Ok(self.total)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(Tally::default(), 8);
///     tokio::spawn(actor.run(()));
///     client.perform_action(TallyAction::Add(3)).await.unwrap();
///     assert_eq!(client.query(TallyQuery::Total).await.unwrap(), 3);
/// }
/// ```
pub struct ResourceActor<R: ActorResource> {
    receiver: mpsc::Receiver<ResourceRequest<R>>,
    resource: R,
}

impl<R: ActorResource> ResourceActor<R> {
    /// Creates a new `ResourceActor` around `resource` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait for
    /// space.
    ///
    /// # Panics
    /// If `buffer_size` is zero.
    pub fn new(resource: R, buffer_size: usize) -> (Self, ResourceClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, resource };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook. It is bound here rather than in `new` so that actors
    /// can depend on clients of actors created after them.
    pub async fn run(mut self, context: R::Context) {
        // "FoodStorage" instead of "pantry::model::food_storage::FoodStorage"
        let resource_type = std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.resource.on_start(&context).await {
            error!(resource_type, error = %e, "on_start failed");
            self.refuse_all(e.to_string()).await;
            return;
        }
        info!(resource_type, size = self.resource.size(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Action { action, respond_to } => {
                    debug!(resource_type, ?action, "Action");
                    let result = self
                        .resource
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::ResourceError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(resource_type, size = self.resource.size(), "Action ok"),
                        Err(e) => warn!(resource_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(resource_type, ?query, "Query");
                    let result = self
                        .resource
                        .handle_query(query, &context)
                        .await
                        .map_err(|e| FrameworkError::ResourceError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(resource_type, error = %e, "Query failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(resource_type, size = self.resource.size(), "Shutdown");
    }

    /// Answers every pending and future request with `StartupFailed` until the channel closes.
    async fn refuse_all(&mut self, reason: String) {
        while let Some(msg) = self.receiver.recv().await {
            let err = || FrameworkError::StartupFailed(reason.clone());
            match msg {
                ResourceRequest::Action { respond_to, .. } => {
                    let _ = respond_to.send(Err(err()));
                }
                ResourceRequest::Query { respond_to, .. } => {
                    let _ = respond_to.send(Err(err()));
                }
            }
        }
    }
}
