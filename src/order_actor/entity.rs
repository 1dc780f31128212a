//! ActorEntity trait implementation for the Order domain type.
//!
//! This is where stored orders change. Every status request runs through
//! [`request_transition`] against the order as the actor holds it at that moment; since the
//! actor handles one request at a time, two conflicting requests for the same order are
//! decided in arrival order and the loser sees the winner's status.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use super::events::{OrderEvent, OrderEvents};
use crate::model::{DeliveryProof, Order, OrderCreate, OrderId, OrderQuery};
use crate::status::{request_transition, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type Context = OrderEvents;
    type Error = OrderError;

    /// Creates a `pending` order from the checkout payload.
    ///
    /// # Errors
    /// [`OrderError::ValidationError`] for a blank buyer or a zero total.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.buyer_id.trim().is_empty() {
            return Err(OrderError::ValidationError(
                "buyer_id must not be empty".to_string(),
            ));
        }
        if params.total == 0 {
            return Err(OrderError::ValidationError(
                "total must be greater than zero".to_string(),
            ));
        }
        Ok(Self::new(id, params.buyer_id, params.total, params.placed_at))
    }

    async fn on_create(&mut self, events: &OrderEvents) -> Result<(), OrderError> {
        info!(order_id = %self.id, buyer_id = %self.buyer_id, total = self.total, "Order placed");
        events.publish(OrderEvent::Placed {
            order_id: self.id,
            buyer_id: self.buyer_id.clone(),
            at: self.placed_at,
        });
        Ok(())
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `RequestTransition`: validates against the status machine, then applies
    /// - `AttachDeliveryProof`: only while `out_for_delivery`; a failed delivery discards it
    /// - `ConfirmReceipt`: only once, and only for a `delivered` order
    ///
    /// A rejected action leaves the order exactly as it was.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        events: &OrderEvents,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::RequestTransition { next, at } => {
                let transition = request_transition(self, next, at)?;
                self.apply(&transition);
                info!(
                    order_id = %self.id,
                    from = %transition.from(),
                    to = %transition.to(),
                    "Order status changed"
                );
                events.publish(OrderEvent::StatusChanged {
                    order_id: self.id,
                    transition,
                });
                Ok(OrderActionResult::RequestTransition(transition))
            }
            OrderAction::AttachDeliveryProof { reference, at } => {
                if self.status != OrderStatus::OutForDelivery {
                    return Err(OrderError::ProofNotAccepted(self.status));
                }
                if reference.trim().is_empty() {
                    return Err(OrderError::ValidationError(
                        "delivery proof reference must not be empty".to_string(),
                    ));
                }
                if let Some(previous) = &self.delivery_proof {
                    debug!(order_id = %self.id, previous = %previous.reference, "Replacing delivery proof");
                }
                let proof = DeliveryProof {
                    reference,
                    uploaded_at: at,
                };
                self.delivery_proof = Some(proof.clone());
                events.publish(OrderEvent::DeliveryProofAttached {
                    order_id: self.id,
                    reference: proof.reference.clone(),
                    at,
                });
                Ok(OrderActionResult::AttachDeliveryProof(proof))
            }
            OrderAction::ConfirmReceipt { at } => {
                if self.status != OrderStatus::Delivered {
                    return Err(OrderError::NotDelivered(self.status));
                }
                if let Some(confirmed_at) = self.delivered_confirmed_at {
                    return Err(OrderError::AlreadyConfirmed(confirmed_at));
                }
                self.delivered_confirmed_at = Some(at);
                info!(order_id = %self.id, "Receipt confirmed by buyer");
                events.publish(OrderEvent::ReceiptConfirmed {
                    order_id: self.id,
                    at,
                });
                Ok(OrderActionResult::ConfirmReceipt(at))
            }
        }
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        query.matches(self)
    }
}
