//! Error types for the Order actor.

use crate::status::{OrderStatus, TransitionError};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The status machine rejected the requested change.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    #[error("Delivery proof can only be attached while the order is out for delivery (status: {0})")]
    ProofNotAccepted(OrderStatus),

    #[error("Receipt can only be confirmed for a delivered order (status: {0})")]
    NotDelivered(OrderStatus),

    #[error("Receipt already confirmed at {0}")]
    AlreadyConfirmed(DateTime<Utc>),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
