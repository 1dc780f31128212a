//! Custom actions for the Order actor.
//!
//! Every change to a stored [`Order`](crate::model::Order) is one of these actions, handled
//! by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) inside the
//! order actor, one at a time.

use crate::model::DeliveryProof;
use crate::status::{OrderStatus, Transition};
use chrono::{DateTime, Utc};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to `next` if the status machine allows it.
    ///
    /// # Errors
    /// Fails with [`TransitionError`](crate::status::TransitionError) when the table forbids
    /// the change or its precondition is unmet.
    RequestTransition {
        next: OrderStatus,
        at: DateTime<Utc>,
    },
    /// Records the courier's proof of delivery. Replaces an earlier upload.
    AttachDeliveryProof { reference: String, at: DateTime<Utc> },
    /// Buyer acknowledges that a delivered order arrived.
    ConfirmReceipt { at: DateTime<Utc> },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    RequestTransition(Transition),
    AttachDeliveryProof(DeliveryProof),
    /// Time the receipt was confirmed.
    ConfirmReceipt(DateTime<Utc>),
}
