//! # System Lifecycle & Orchestration
//!
//! Starts the order actor with its dependencies injected, hands out the client and event
//! subscriptions, and shuts everything down in order.
//!
//! ## Dependency Injection via Context
//!
//! The order actor is created without dependencies and receives its
//! [`OrderEvents`](crate::order_actor::OrderEvents) publisher only when it starts
//! (`actor.run(events)`). The system keeps a clone of the publisher so callers can
//! [`subscribe`](OrderSystem::subscribe) at any time.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client and publisher** - closes the request channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` and the loop ends
//! 3. **Await completion** - wait for the actor task to finish
//!
//! ## Configuration
//!
//! [`SystemConfig`] carries the channel sizes. Defaults work for tests and demos;
//! [`SystemConfig::from_env`] reads overrides from the environment.
//!
//! ## Observability
//!
//! Logging is initialised once per process with
//! [`actor_framework::tracing::setup_tracing`]; `RUST_LOG` selects the level.

pub mod config;
pub mod order_system;

pub use config::*;
pub use order_system::*;
