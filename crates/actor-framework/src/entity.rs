//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource must satisfy to be owned by a
//! [`ResourceActor`](crate::ResourceActor). It names the ID, the creation payload, the
//! resource-specific actions, the list query, the injected context and the error type.
//!
//! Resources managed this way are **append-only**: once created they are never removed, and
//! every state change goes through [`ActorEntity::handle_action`]. That is what lets an
//! actor serialise all mutations of one resource without any locks.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs once, after `from_create_params`.
//! - [`ActorEntity::matches`] filters entities for `List` requests (defaults to "match all").

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors or publish events. The
/// `Context` type is injected into every hook when the actor starts running ("late binding"),
/// so dependencies do not have to exist when the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for sequential ID generation, and ordered so listings
    /// come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `List` requests.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per action: clients match on a single type,
    /// at the cost of each action's signature admitting every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called immediately after the entity is constructed and before it is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    ///
    /// The actor stores whatever state the entity holds when this returns, so an
    /// implementation that fails must leave `self` untouched.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Returns whether this entity belongs in the result of a `List` request.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }
}
