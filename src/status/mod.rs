//! Order lifecycle statuses and the transition table.
//!
//! [`OrderStatus`] is a closed enumeration and [`OrderStatus::allowed_transitions`] is the
//! only place the lifecycle graph is written down. Validation ([`machine`]) and presentation
//! ([`labels`]) both derive from it through exhaustive `match`es, so adding a status without
//! giving it a row, a label and a color does not compile.
//!
//! The happy path runs `pending → validation → paid → processed → out_for_delivery →
//! delivered`. Payment can bounce back through `payment_rejected`, delivery through
//! `failed_delivery`, and a delivered order can still be `returned` and `refunded`.
//! `refunded` and `cancelled` are terminal.

pub mod labels;
pub mod machine;

pub use labels::*;
pub use machine::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed at checkout, waiting for the buyer to pay.
    Pending,
    /// Buyer submitted a payment; an admin has to check it.
    Validation,
    Paid,
    Processed,
    OutForDelivery,
    Delivered,
    PaymentRejected,
    FailedDelivery,
    Returned,
    Refunded,
    Cancelled,
}

use OrderStatus::*;

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 11] = [
        Pending,
        Validation,
        Paid,
        Processed,
        OutForDelivery,
        Delivered,
        PaymentRejected,
        FailedDelivery,
        Returned,
        Refunded,
        Cancelled,
    ];

    /// Status of a freshly placed order.
    pub const INITIAL: OrderStatus = Pending;

    /// The statuses an order may move to from `self`.
    pub const fn allowed_transitions(self) -> &'static [OrderStatus] {
        match self {
            Pending => &[Validation, Cancelled],
            Validation => &[Paid, PaymentRejected, Cancelled],
            Paid => &[Processed, Cancelled],
            Processed => &[OutForDelivery, Cancelled],
            OutForDelivery => &[Delivered, FailedDelivery],
            Delivered => &[Returned],
            PaymentRejected => &[Validation, Cancelled],
            FailedDelivery => &[OutForDelivery, Cancelled],
            Returned => &[Refunded],
            Refunded => &[],
            Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Terminal statuses have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Whether an admin may approve the submitted payment.
    pub fn can_approve_payment(self) -> bool {
        self.can_transition_to(Paid)
    }

    /// Whether an admin may reject the submitted payment.
    pub fn can_reject_payment(self) -> bool {
        self.can_transition_to(PaymentRejected)
    }

    pub fn can_cancel(self) -> bool {
        self.can_transition_to(Cancelled)
    }

    /// Status code as stored and sent over the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Pending => "pending",
            Validation => "validation",
            Paid => "paid",
            Processed => "processed",
            OutForDelivery => "out_for_delivery",
            Delivered => "delivered",
            PaymentRejected => "payment_rejected",
            FailedDelivery => "failed_delivery",
            Returned => "returned",
            Refunded => "refunded",
            Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status code that names no [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == code)
            .ok_or_else(|| UnknownStatus(code.to_string()))
    }
}
