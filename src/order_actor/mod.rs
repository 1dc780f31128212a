//! # Order Actor
//!
//! The resource actor that owns every order and is the only writer of order status.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`error`] - [`OrderError`]
//! - [`events`] - [`OrderEvent`]s published after each stored change
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use order_lifecycle::model::OrderCreate;
//! use order_lifecycle::order_actor::{self, OrderEvents};
//! use order_lifecycle::status::OrderStatus;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(16);
//!     tokio::spawn(actor.run(OrderEvents::new(16)));
//!
//!     let id = client
//!         .place_order(OrderCreate {
//!             buyer_id: "buyer_1".to_string(),
//!             total: 120_000,
//!             placed_at: Utc::now(),
//!         })
//!         .await?;
//!
//!     client.request_transition(id, OrderStatus::Validation).await?;
//!     assert!(client.request_transition(id, OrderStatus::Delivered).await.is_err());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod events;

pub use actions::*;
pub use error::*;
pub use events::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The actor does nothing until it is started with `actor.run(events)`.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(client))
}
