//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on Tokio. Each resource type gets one actor
//! that owns every instance of that resource and handles requests one at a time; callers talk
//! to it through a cloneable client.
//!
//! ## Why an actor per resource?
//!
//! - **Serialised mutation**: two requests against the same resource can never interleave,
//!   so read-check-write logic inside an entity needs no locks and cannot race.
//! - **Isolated state**: no shared memory; the store lives inside the actor's task.
//! - **Uniform API**: Create / Get / List / Action work the same for every entity type.
//!
//! Resources are append-only. There is no update or delete request: a stored entity changes
//! only through its own [`ActorEntity::handle_action`], which is where its invariants live.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules of one resource type
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and entity store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`actor.run(context)`), not when it is
//! constructed. An entity can therefore depend on clients or publishers that are created
//! after the actor itself.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use tokio::sync::mpsc;
//!
//! #[derive(Clone, Debug)] struct Ticket { id: u32, open: bool }
//! #[derive(Debug)] struct TicketCreate;
//! #[derive(Debug)] enum TicketAction { Close }
//! #[derive(Debug, thiserror::Error)] #[error("ticket already closed")] struct AlreadyClosed;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Query = ();
//!     // Closed ticket IDs are reported on this channel.
//!     type Context = mpsc::UnboundedSender<u32>;
//!     type Error = AlreadyClosed;
//!
//!     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, open: true })
//!     }
//!
//!     async fn handle_action(&mut self, _: TicketAction, closed: &Self::Context) -> Result<(), Self::Error> {
//!         if !self.open {
//!             return Err(AlreadyClosed);
//!         }
//!         self.open = false;
//!         let _ = closed.send(self.id);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (closed_tx, mut closed_rx) = mpsc::unbounded_channel();
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(closed_tx));
//!
//!     let id = client.create(TicketCreate).await.unwrap();
//!     client.perform_action(id, TicketAction::Close).await.unwrap();
//!     assert!(client.perform_action(id, TicketAction::Close).await.is_err());
//!     assert_eq!(closed_rx.recv().await, Some(id));
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations, so
//! client wrappers can be tested without spawning their actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
