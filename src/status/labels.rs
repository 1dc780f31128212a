//! Display data for statuses: the label and badge color shown to buyers, vendors and admins.

use super::OrderStatus;
use serde::Serialize;

/// Badge color of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Gray,
    Yellow,
    Blue,
    Indigo,
    Purple,
    Orange,
    Green,
    Red,
}

impl OrderStatus {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu Pembayaran",
            OrderStatus::Validation => "Menunggu Validasi",
            OrderStatus::Paid => "Dibayar",
            OrderStatus::Processed => "Diproses",
            OrderStatus::OutForDelivery => "Dalam Pengiriman",
            OrderStatus::Delivered => "Terkirim",
            OrderStatus::PaymentRejected => "Pembayaran Ditolak",
            OrderStatus::FailedDelivery => "Pengiriman Gagal",
            OrderStatus::Returned => "Dikembalikan",
            OrderStatus::Refunded => "Dana Dikembalikan",
            OrderStatus::Cancelled => "Dibatalkan",
        }
    }

    pub const fn color(self) -> StatusColor {
        match self {
            OrderStatus::Pending => StatusColor::Yellow,
            OrderStatus::Validation => StatusColor::Orange,
            OrderStatus::Paid => StatusColor::Blue,
            OrderStatus::Processed => StatusColor::Indigo,
            OrderStatus::OutForDelivery => StatusColor::Purple,
            OrderStatus::Delivered => StatusColor::Green,
            OrderStatus::PaymentRejected => StatusColor::Red,
            OrderStatus::FailedDelivery => StatusColor::Red,
            OrderStatus::Returned => StatusColor::Orange,
            OrderStatus::Refunded => StatusColor::Gray,
            OrderStatus::Cancelled => StatusColor::Gray,
        }
    }
}

/// One entry of a status picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    #[serde(rename = "value")]
    pub code: OrderStatus,
    pub label: &'static str,
    pub color: StatusColor,
}

impl From<OrderStatus> for StatusOption {
    fn from(status: OrderStatus) -> Self {
        Self {
            code: status,
            label: status.label(),
            color: status.color(),
        }
    }
}

/// One option per status, in lifecycle order.
pub fn status_options() -> Vec<StatusOption> {
    OrderStatus::ALL.into_iter().map(StatusOption::from).collect()
}

/// Options for the statuses reachable from `current`, for an "update status" dropdown.
pub fn next_status_options(current: OrderStatus) -> Vec<StatusOption> {
    current
        .allowed_transitions()
        .iter()
        .copied()
        .map(StatusOption::from)
        .collect()
}
