//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: provided `perform` and `ask` methods built
//! on top of a generic `ResourceClient`, with errors mapped into the resource's own type.
use crate::{ActorResource, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the raw request plumbing.
///
/// Implementors only say where the inner client lives and how to translate a
/// [`FrameworkError`]; typed wrappers such as `add_lot` or `all_recipes` are then one-line
/// matches over the result enum.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorResource, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)] struct Tally { total: u64 }
/// #[derive(Debug)] enum TallyAction { Add(u64) }
/// #[derive(Debug)] enum TallyQuery { Total }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TallyError(String);
///
/// #[async_trait]
/// impl ActorResource for Tally {
///     type Action = TallyAction; type ActionResult = ();
///     type Query = TallyQuery; type QueryResult = u64;
///     type Context = (); type Error = TallyError;
///     async fn handle_action(&mut self, a: TallyAction, _: &()) -> Result<(), TallyError> {
///         match a { TallyAction::Add(n) => self.total += n }
///         Ok(())
///     }
///     async fn handle_query(&self, _: TallyQuery, _: &()) -> Result<u64, TallyError> {
///         Ok(self.total)
///     }
/// }
///
/// struct TallyClient { inner: ResourceClient<Tally> }
///
/// #[async_trait]
/// impl ActorClient<Tally> for TallyClient {
///     type Error = TallyError;
///     fn inner(&self) -> &ResourceClient<Tally> { &self.inner }
///     fn map_error(e: FrameworkError) -> TallyError { TallyError(e.to_string()) }
/// }
///
/// async fn usage(client: TallyClient) -> Result<u64, TallyError> {
///     client.perform(TallyAction::Add(2)).await?;
///     client.ask(TallyQuery::Total).await
/// }
/// ```
#[async_trait]
pub trait ActorClient<R: ActorResource>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<R>;

    /// Map runtime errors to the resource-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send a mutating request.
    #[tracing::instrument(skip(self))]
    async fn perform(&self, action: R::Action) -> Result<R::ActionResult, Self::Error> {
        tracing::debug!("Sending action");
        self.inner().perform_action(action).await.map_err(Self::map_error)
    }

    /// Send a read-only request.
    #[tracing::instrument(skip(self))]
    async fn ask(&self, query: R::Query) -> Result<R::QueryResult, Self::Error> {
        tracing::debug!("Sending query");
        self.inner().query(query).await.map_err(Self::map_error)
    }
}
