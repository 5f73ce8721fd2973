//! # Mock Clients & Testing Guide
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered from a queue
//! of scripted responses instead of a running resource. It lets you test code that *talks to*
//! an actor (a typed client wrapper, or another actor holding the client in its context)
//! without standing up the resource behind it.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, responses are scripted | Real resource state |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Needs a state that fails |
//! | **Use Case** | Logic *around* the client | The resource itself, or the whole system |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic**: script responses with [`MockClient`], or inspect raw requests with
//!    [`create_mock_client`] plus [`expect_action`] / [`expect_query`].
//! 2. **Single actor**: spawn a real `ResourceActor` with a `()` or fixed context.
//! 3. **Actor with mocked dependencies**: a real actor whose context holds mock clients.
//! 4. **Full system**: everything real, wired by the application's lifecycle module.
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorResource, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Debug, Default)] struct Shelf;
//! #[derive(Debug)] enum ShelfAction { Restock }
//! #[derive(Debug)] enum ShelfQuery { Count }
//! #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorResource for Shelf {
//!     type Action = ShelfAction; type ActionResult = ();
//!     type Query = ShelfQuery; type QueryResult = usize;
//!     type Context = (); type Error = ShelfError;
//!     async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), ShelfError> { Ok(()) }
//!     async fn handle_query(&self, _: ShelfQuery, _: &()) -> Result<usize, ShelfError> { Ok(0) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Shelf>::new();
//!     mock.expect_query().return_ok(7);
//!     mock.expect_action().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.query(ShelfQuery::Count).await.unwrap(), 7);
//!     assert!(matches!(
//!         client.perform_action(ShelfAction::Restock).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::resource::ActorResource;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted response, consumed in FIFO order.
enum Expectation<R: ActorResource> {
    Action {
        response: Result<R::ActionResult, FrameworkError>,
    },
    Query {
        response: Result<R::QueryResult, FrameworkError>,
    },
}

type Expectations<R> = Arc<Mutex<VecDeque<Expectation<R>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// A request that arrives when the next scripted response is of the other kind (or when
/// nothing is scripted) panics the mock's background task, which then surfaces to the caller
/// as [`FrameworkError::ActorDropped`] / [`FrameworkError::ActorClosed`].
pub struct MockClient<R: ActorResource> {
    client: ResourceClient<R>,
    expectations: Expectations<R>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: ActorResource> Default for MockClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ActorResource> MockClient<R> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<R>>(100);
        let expectations: Expectations<R> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<R> {
        self.client.clone()
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<R> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` request.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<R> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<R: ActorResource> {
    expectations: Expectations<R>,
}

impl<R: ActorResource> ActionExpectationBuilder<R> {
    pub fn return_ok(self, result: R::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<R: ActorResource> {
    expectations: Expectations<R>,
}

impl<R: ActorResource> QueryExpectationBuilder<R> {
    pub fn return_ok(self, result: R::QueryResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R::QueryResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query { response });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Use this when the test needs to look at the request itself (e.g. "did the client ask to
/// remove 3 kg of apples?") before choosing a response.
pub fn create_mock_client<R: ActorResource>(
    buffer_size: usize,
) -> (ResourceClient<R>, mpsc::Receiver<ResourceRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<R: ActorResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<R>>,
) -> Option<(
    R::Action,
    oneshot::Sender<Result<R::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Query.
pub async fn expect_query<R: ActorResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<R>>,
) -> Option<(
    R::Query,
    oneshot::Sender<Result<R::QueryResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
