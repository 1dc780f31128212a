//! Order events for downstream notification.
//!
//! The order actor publishes an [`OrderEvent`] after every change it stores. Whoever turns
//! those into buyer or vendor notifications subscribes through [`OrderEvents::subscribe`].
//! Publishing never fails the change that caused it: with no subscriber the event is
//! dropped, and a subscriber that falls behind by more than the channel capacity misses the
//! oldest events (`RecvError::Lagged`).

use crate::model::OrderId;
use crate::status::Transition;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEvent {
    Placed {
        order_id: OrderId,
        buyer_id: String,
        at: DateTime<Utc>,
    },
    StatusChanged {
        order_id: OrderId,
        transition: Transition,
    },
    DeliveryProofAttached {
        order_id: OrderId,
        reference: String,
        at: DateTime<Utc>,
    },
    ReceiptConfirmed {
        order_id: OrderId,
        at: DateTime<Utc>,
    },
}

impl OrderEvent {
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderEvent::Placed { order_id, .. }
            | OrderEvent::StatusChanged { order_id, .. }
            | OrderEvent::DeliveryProofAttached { order_id, .. }
            | OrderEvent::ReceiptConfirmed { order_id, .. } => *order_id,
        }
    }
}

/// Publisher handed to the order actor as its context.
#[derive(Debug, Clone)]
pub struct OrderEvents {
    sender: broadcast::Sender<OrderEvent>,
}

impl OrderEvents {
    /// `capacity` must be greater than zero.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: OrderEvent) {
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            debug!(order_id = %event.order_id(), "No subscribers for order event");
        }
    }
}
