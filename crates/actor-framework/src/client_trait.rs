//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get` and `list` built on top of
//! a generic `ResourceClient`, with framework errors mapped into the resource's own error.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Invoice { id: u32 }
/// #[derive(Debug)] struct InvoiceCreate;
/// #[derive(Debug)] enum InvoiceAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct InvoiceError(String);
///
/// impl From<String> for InvoiceError {
///     fn from(s: String) -> Self { InvoiceError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Invoice {
///     type Id = u32;
///     type Create = InvoiceCreate;
///     type Action = InvoiceAction;
///     type ActionResult = ();
///     type Query = ();
///     type Context = ();
///     type Error = InvoiceError;
///
///     fn from_create_params(id: u32, _: InvoiceCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn handle_action(&mut self, _: InvoiceAction, _: &()) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// struct InvoiceClient {
///     inner: ResourceClient<Invoice>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Invoice> for InvoiceClient {
///     type Error = InvoiceError;
///
///     fn inner(&self) -> &ResourceClient<Invoice> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         InvoiceError(e.to_string())
///     }
/// }
///
/// async fn usage(client: InvoiceClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list(()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity accepted by `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }
}
