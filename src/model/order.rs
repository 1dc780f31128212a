//! Order entity, its checkout payload and listing filter.

use crate::status::{OrderStatus, Transition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Reference to the uploaded proof-of-delivery artifact (photo of the handover, signed receipt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryProof {
    pub reference: String,
    pub uploaded_at: DateTime<Utc>,
}

/// One entry of an order's status timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub at: DateTime<Utc>,
}

/// Represents a marketplace order and its lifecycle state.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait, so every
/// order lives inside the order [`ResourceActor`](actor_framework::ResourceActor) and changes
/// only through [`OrderAction`](crate::order_actor::OrderAction)s.
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status changes ([`request_transition`](crate::status::request_transition))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub buyer_id: String,
    /// Order total in rupiah.
    pub total: u64,
    pub status: OrderStatus,
    pub delivery_proof: Option<DeliveryProof>,
    pub paid_at: Option<DateTime<Utc>>,
    pub delivered_confirmed_at: Option<DateTime<Utc>>,
    pub placed_at: DateTime<Utc>,
    pub history: Vec<StatusChange>,
}

/// Checkout payload for a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub buyer_id: String,
    pub total: u64,
    pub placed_at: DateTime<Utc>,
}

/// Filter for order listings. Unset fields match every order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    pub buyer_id: Option<String>,
}

impl OrderQuery {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn for_buyer(buyer_id: impl Into<String>) -> Self {
        Self {
            buyer_id: Some(buyer_id.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.map_or(true, |status| status == order.status)
            && self
                .buyer_id
                .as_deref()
                .map_or(true, |buyer| buyer == order.buyer_id)
    }
}

impl Order {
    /// Creates a new order in [`OrderStatus::INITIAL`].
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor system)
    /// * `buyer_id` - ID of the buyer who checked out
    /// * `total` - Order total in rupiah
    /// * `placed_at` - Checkout time
    pub fn new(
        id: OrderId,
        buyer_id: impl Into<String>,
        total: u64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            buyer_id: buyer_id.into(),
            total,
            status: OrderStatus::INITIAL,
            delivery_proof: None,
            paid_at: None,
            delivered_confirmed_at: None,
            placed_at,
            history: Vec::new(),
        }
    }

    /// Writes a validated transition into the order: the new status, any derived
    /// timestamps, and a timeline entry. Entering `failed_delivery` discards the delivery
    /// proof, so the next attempt needs its own.
    ///
    /// `transition` must come from [`request_transition`](crate::status::request_transition)
    /// against this order's current state. Only the order actor calls this.
    pub(crate) fn apply(&mut self, transition: &Transition) {
        debug_assert_eq!(self.status, transition.from());
        self.status = transition.to();
        if let Some(paid_at) = transition.paid_at() {
            self.paid_at = Some(paid_at);
        }
        if transition.to() == OrderStatus::FailedDelivery {
            self.delivery_proof = None;
        }
        self.history.push(StatusChange {
            from: transition.from(),
            to: transition.to(),
            at: transition.at(),
        });
    }

    /// Timestamp of the last status change, or checkout time if the order never moved.
    pub fn last_changed_at(&self) -> DateTime<Utc> {
        self.history
            .last()
            .map_or(self.placed_at, |change| change.at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::request_transition;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 11, hour, 0, 0).unwrap()
    }

    fn order() -> Order {
        Order::new(OrderId(1), "buyer_7", 150_000, at(8))
    }

    #[test]
    fn test_new_order_is_pending_and_untouched() {
        let order = order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.history.is_empty());
        assert_eq!(order.last_changed_at(), at(8));
        assert_eq!(order.id.to_string(), "order_1");
    }

    #[test]
    fn test_apply_records_status_timeline_and_payment_time() {
        let mut order = order();
        let to_validation = request_transition(&order, OrderStatus::Validation, at(9)).unwrap();
        order.apply(&to_validation);
        let to_paid = request_transition(&order, OrderStatus::Paid, at(10)).unwrap();
        order.apply(&to_paid);

        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.paid_at, Some(at(10)));
        assert_eq!(order.last_changed_at(), at(10));
        assert_eq!(
            order.history,
            vec![
                StatusChange {
                    from: OrderStatus::Pending,
                    to: OrderStatus::Validation,
                    at: at(9),
                },
                StatusChange {
                    from: OrderStatus::Validation,
                    to: OrderStatus::Paid,
                    at: at(10),
                },
            ]
        );
    }

    #[test]
    fn test_failed_delivery_discards_proof() {
        let mut order = order();
        order.status = OrderStatus::OutForDelivery;
        order.delivery_proof = Some(DeliveryProof {
            reference: "attempt1.jpg".to_string(),
            uploaded_at: at(11),
        });

        let failed = request_transition(&order, OrderStatus::FailedDelivery, at(12)).unwrap();
        order.apply(&failed);
        assert!(order.delivery_proof.is_none());

        let retry = request_transition(&order, OrderStatus::OutForDelivery, at(13)).unwrap();
        order.apply(&retry);
        assert!(request_transition(&order, OrderStatus::Delivered, at(14)).is_err());
    }

    #[test]
    fn test_query_matching() {
        let order = order();
        assert!(OrderQuery::default().matches(&order));
        assert!(OrderQuery::with_status(OrderStatus::Pending).matches(&order));
        assert!(!OrderQuery::with_status(OrderStatus::Paid).matches(&order));
        assert!(OrderQuery::for_buyer("buyer_7").matches(&order));
        assert!(!OrderQuery::for_buyer("buyer_8").matches(&order));
    }
}
