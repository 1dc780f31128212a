//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod order_client;

pub use order_client::*;
