//! The order status machine: decides whether a requested status change is legal and what it
//! implies.
//!
//! [`request_transition`] is pure. It reads the order, never writes it, and takes the current
//! time from the caller so results are reproducible. Persisting the outcome (done by the
//! order actor), serialising concurrent requests for the same order, and notifying anyone
//! are the caller's job.

use super::OrderStatus;
use crate::model::Order;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// An accepted status change and the fields it derives.
///
/// Only [`request_transition`] builds one, so every `Transition` an order is given has
/// passed the table:
///
/// ```compile_fail
/// use chrono::Utc;
/// use order_lifecycle::status::{OrderStatus, Transition};
///
/// let forged = Transition {
///     from: OrderStatus::Pending,
///     to: OrderStatus::Refunded,
///     at: Utc::now(),
///     paid_at: None,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    from: OrderStatus,
    to: OrderStatus,
    at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl Transition {
    pub fn from(&self) -> OrderStatus {
        self.from
    }

    pub fn to(&self) -> OrderStatus {
        self.to
    }

    /// When the change was requested.
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Set when the order becomes `paid`.
    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }
}

/// A condition an edge of the table needs beyond the table itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// `out_for_delivery → delivered` needs an uploaded proof of delivery.
    DeliveryProofRequired,
}

impl std::fmt::Display for Precondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precondition::DeliveryProofRequired => {
                f.write_str("proof of delivery must be uploaded before the order is delivered")
            }
        }
    }
}

/// Why a status change was rejected. The order is unchanged in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// `to` is not in the transition table row of `from`.
    #[error("cannot change order status from \"{}\" to \"{}\"", .from.label(), .to.label())]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("precondition failed: {0}")]
    PreconditionFailed(Precondition),
}

impl TransitionError {
    /// Label of the status the order was in, for IllegalTransition.
    pub fn from_label(&self) -> Option<&'static str> {
        match self {
            TransitionError::IllegalTransition { from, .. } => Some(from.label()),
            TransitionError::PreconditionFailed(_) => None,
        }
    }

    /// Label of the status that was requested, for IllegalTransition.
    pub fn to_label(&self) -> Option<&'static str> {
        match self {
            TransitionError::IllegalTransition { to, .. } => Some(to.label()),
            TransitionError::PreconditionFailed(_) => None,
        }
    }
}

/// Validates moving `order` to `next` at time `now`.
///
/// Checks run in this order:
/// 1. delivering an `out_for_delivery` order needs a delivery proof
///    ([`TransitionError::PreconditionFailed`]);
/// 2. `next` must be in the table row of the current status
///    ([`TransitionError::IllegalTransition`]). Asking for the current status is illegal too.
///
/// On success the returned [`Transition`] carries `paid_at == Some(now)` when `next` is
/// `paid`.
pub fn request_transition(
    order: &Order,
    next: OrderStatus,
    now: DateTime<Utc>,
) -> Result<Transition, TransitionError> {
    let current = order.status;

    if next == OrderStatus::Delivered
        && current == OrderStatus::OutForDelivery
        && order.delivery_proof.is_none()
    {
        return Err(TransitionError::PreconditionFailed(
            Precondition::DeliveryProofRequired,
        ));
    }

    if !current.can_transition_to(next) {
        return Err(TransitionError::IllegalTransition {
            from: current,
            to: next,
        });
    }

    Ok(Transition {
        from: current,
        to: next,
        at: now,
        paid_at: (next == OrderStatus::Paid).then_some(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeliveryProof, OrderId};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap()
    }

    fn order_in(status: OrderStatus) -> Order {
        let mut order = Order::new(OrderId(1), "buyer_1", 250_000, now());
        order.status = status;
        order
    }

    fn with_proof(mut order: Order) -> Order {
        order.delivery_proof = Some(DeliveryProof {
            reference: "proof.jpg".to_string(),
            uploaded_at: now(),
        });
        order
    }

    #[test]
    fn test_every_pair_follows_the_table() {
        for from in OrderStatus::ALL {
            // Proof attached so the delivery precondition never masks the table check.
            let order = with_proof(order_in(from));
            for to in OrderStatus::ALL {
                let result = request_transition(&order, to, now());
                if from.can_transition_to(to) {
                    let transition = result.unwrap();
                    assert_eq!(transition.from(), from);
                    assert_eq!(transition.to(), to);
                } else {
                    assert_eq!(
                        result,
                        Err(TransitionError::IllegalTransition { from, to }),
                        "{from} -> {to}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_delivery_without_proof_fails_precondition() {
        let result = request_transition(
            &order_in(OrderStatus::OutForDelivery),
            OrderStatus::Delivered,
            now(),
        );
        assert_eq!(
            result,
            Err(TransitionError::PreconditionFailed(
                Precondition::DeliveryProofRequired
            ))
        );
    }

    #[test]
    fn test_delivery_with_proof_succeeds() {
        let order = with_proof(order_in(OrderStatus::OutForDelivery));
        let transition = request_transition(&order, OrderStatus::Delivered, now()).unwrap();
        assert_eq!(transition.to(), OrderStatus::Delivered);
        assert_eq!(transition.paid_at(), None);
    }

    #[test]
    fn test_failed_delivery_needs_no_proof() {
        let order = order_in(OrderStatus::OutForDelivery);
        let transition = request_transition(&order, OrderStatus::FailedDelivery, now()).unwrap();
        assert_eq!(transition.to(), OrderStatus::FailedDelivery);
    }

    #[test]
    fn test_delivered_from_elsewhere_is_illegal_even_without_proof() {
        let result = request_transition(
            &order_in(OrderStatus::Processed),
            OrderStatus::Delivered,
            now(),
        );
        assert_eq!(
            result,
            Err(TransitionError::IllegalTransition {
                from: OrderStatus::Processed,
                to: OrderStatus::Delivered,
            })
        );
    }

    #[test]
    fn test_payment_approval_stamps_paid_at() {
        let transition =
            request_transition(&order_in(OrderStatus::Validation), OrderStatus::Paid, now())
                .unwrap();
        assert_eq!(transition.to(), OrderStatus::Paid);
        assert_eq!(transition.paid_at(), Some(now()));
        assert_eq!(transition.at(), now());
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for terminal in [OrderStatus::Refunded, OrderStatus::Cancelled] {
            let order = with_proof(order_in(terminal));
            for to in OrderStatus::ALL {
                assert!(matches!(
                    request_transition(&order, to, now()),
                    Err(TransitionError::IllegalTransition { .. })
                ));
            }
        }
    }

    #[test]
    fn test_same_status_is_illegal() {
        let result =
            request_transition(&order_in(OrderStatus::Paid), OrderStatus::Paid, now());
        assert!(matches!(
            result,
            Err(TransitionError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn test_illegal_transition_reports_labels() {
        let err = request_transition(&order_in(OrderStatus::Pending), OrderStatus::Paid, now())
            .unwrap_err();
        assert_eq!(err.from_label(), Some("Menunggu Pembayaran"));
        assert_eq!(err.to_label(), Some("Dibayar"));
        assert_eq!(
            err.to_string(),
            "cannot change order status from \"Menunggu Pembayaran\" to \"Dibayar\""
        );
    }
}
