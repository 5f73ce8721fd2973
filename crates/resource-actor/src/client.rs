//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::resource::ActorResource;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// It only holds the sending half of the mailbox, so cloning is cheap and clones can be
/// handed to other tasks or injected into other actors' contexts. The actor shuts down once
/// the last clone is dropped.
pub struct ResourceClient<R: ActorResource> {
    sender: mpsc::Sender<ResourceRequest<R>>,
}

// Manual impl: a derive would require `R: Clone`.
impl<R: ActorResource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: ActorResource> ResourceClient<R> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<R>>) -> Self {
        Self { sender }
    }

    pub async fn perform_action(&self, action: R::Action) -> Result<R::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn query(&self, query: R::Query) -> Result<R::QueryResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Query { query, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
