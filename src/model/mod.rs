//! Pure data structures managed by the order actor.

pub mod order;

pub use order::*;
