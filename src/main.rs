//! # Order Lifecycle Demo
//!
//! Drives one order through the marketplace lifecycle against a running [`OrderSystem`]:
//! checkout, payment validation, fulfilment, a delivery attempt without proof (rejected),
//! proof upload, delivery and buyer confirmation. A second order shows an illegal jump.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_CONFIG=orders.toml RUST_LOG=debug cargo run
//! ```

use actor_framework::tracing::setup_tracing;
use chrono::Utc;
use order_lifecycle::lifecycle::{OrderSystem, SystemConfig, ORDER_CONFIG_ENV};
use order_lifecycle::model::OrderCreate;
use order_lifecycle::order_actor::OrderError;
use order_lifecycle::status::OrderStatus;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var(ORDER_CONFIG_ENV) {
        Ok(path) => SystemConfig::from_file(path),
        Err(_) => SystemConfig::from_env(),
    }
    .map_err(|e| e.to_string())?;
    info!(?config, "Starting order lifecycle demo");

    let system = OrderSystem::new(&config).map_err(|e| e.to_string())?;

    let mut events = system.subscribe();
    let notifier = tokio::spawn(
        async move {
            loop {
                match events.recv().await {
                    Ok(event) => info!(order_id = %event.order_id(), ?event, "Notify"),
                    Err(RecvError::Lagged(missed)) => warn!(missed, "Notifier fell behind"),
                    Err(RecvError::Closed) => break,
                }
            }
        }
        .instrument(tracing::info_span!("notifier")),
    );

    let orders = &system.order_client;

    let order_id = orders
        .place_order(OrderCreate {
            buyer_id: "buyer_42".to_string(),
            total: 275_000,
            placed_at: Utc::now(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%order_id, "Order placed");

    let span = tracing::info_span!("fulfilment", %order_id);
    async {
        for next in [
            OrderStatus::Validation,
            OrderStatus::Paid,
            OrderStatus::Processed,
            OrderStatus::OutForDelivery,
        ] {
            let transition = orders
                .request_transition(order_id, next)
                .await
                .map_err(|e| e.to_string())?;
            info!(from = %transition.from().label(), to = %transition.to().label(), "Status changed");
        }

        match orders
            .request_transition(order_id, OrderStatus::Delivered)
            .await
        {
            Err(OrderError::Transition(e)) => warn!(error = %e, "Delivery rejected"),
            other => return Err(format!("expected delivery to be rejected, got {other:?}")),
        }

        orders
            .attach_delivery_proof(order_id, "proofs/order_1/handover.jpg".to_string())
            .await
            .map_err(|e| e.to_string())?;
        orders
            .request_transition(order_id, OrderStatus::Delivered)
            .await
            .map_err(|e| e.to_string())?;
        let confirmed_at = orders
            .confirm_receipt(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(%confirmed_at, "Buyer confirmed receipt");

        let options: Vec<&str> = orders
            .available_transitions(order_id)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(|option| option.label)
            .collect();
        info!(?options, "Next statuses offered to the vendor");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let second = orders
        .place_order(OrderCreate {
            buyer_id: "buyer_7".to_string(),
            total: 40_000,
            placed_at: Utc::now(),
        })
        .await
        .map_err(|e| e.to_string())?;
    if let Err(e) = orders.request_transition(second, OrderStatus::Paid).await {
        warn!(order_id = %second, error = %e, "Illegal status change refused");
    }

    let delivered = orders
        .orders_with_status(OrderStatus::Delivered)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = delivered.len(), "Delivered orders");

    system.shutdown().await?;
    notifier.await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
