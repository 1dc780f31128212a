//! # Order Lifecycle
//!
//! Order status state machine for a multi-vendor marketplace, and the actor that owns order
//! state.
//!
//! - **[status]**: the closed [`OrderStatus`](status::OrderStatus) set, its transition table,
//!   display labels, and the pure [`request_transition`](status::request_transition) check.
//! - **[model]**: the [`Order`](model::Order) entity and its checkout payload.
//! - **[order_actor]**: the [`ActorEntity`](actor_framework::ActorEntity) implementation that
//!   applies accepted transitions and publishes events.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the typed way in.
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem) wiring and configuration.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning the actor.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod status;
