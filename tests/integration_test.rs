use actor_framework::ActorClient;
use chrono::Utc;
use order_lifecycle::lifecycle::{OrderSystem, SystemConfig};
use order_lifecycle::model::{OrderCreate, OrderId, OrderQuery};
use order_lifecycle::order_actor::{OrderError, OrderEvent};
use order_lifecycle::status::{OrderStatus, Precondition, TransitionError};

fn checkout(buyer_id: &str, total: u64) -> OrderCreate {
    OrderCreate {
        buyer_id: buyer_id.to_string(),
        total,
        placed_at: Utc::now(),
    }
}

async fn advance(system: &OrderSystem, id: OrderId, path: &[OrderStatus]) {
    for &next in path {
        system
            .order_client
            .request_transition(id, next)
            .await
            .unwrap_or_else(|e| panic!("{id} -> {next}: {e}"));
    }
}

/// Full end-to-end run: checkout to confirmed receipt, with a failed delivery on the way.
#[tokio::test]
async fn test_full_order_lifecycle() {
    let system = OrderSystem::new(&SystemConfig::default()).unwrap();
    let mut events = system.subscribe();

    let id = system
        .order_client
        .place_order(checkout("buyer_1", 310_000))
        .await
        .expect("Failed to place order");

    advance(
        &system,
        id,
        &[
            OrderStatus::Validation,
            OrderStatus::PaymentRejected,
            OrderStatus::Validation,
            OrderStatus::Paid,
            OrderStatus::Processed,
            OrderStatus::OutForDelivery,
            OrderStatus::FailedDelivery,
            OrderStatus::OutForDelivery,
        ],
    )
    .await;

    let err = system
        .order_client
        .request_transition(id, OrderStatus::Delivered)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::Transition(TransitionError::PreconditionFailed(
            Precondition::DeliveryProofRequired
        ))
    );

    system
        .order_client
        .attach_delivery_proof(id, "proofs/handover.jpg".to_string())
        .await
        .unwrap();
    advance(&system, id, &[OrderStatus::Delivered]).await;

    let confirmed_at = system.order_client.confirm_receipt(id).await.unwrap();
    let again = system.order_client.confirm_receipt(id).await.unwrap_err();
    assert_eq!(again, OrderError::AlreadyConfirmed(confirmed_at));

    let order = system.order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    assert!(order.paid_at.is_some());
    assert_eq!(order.delivered_confirmed_at, Some(confirmed_at));
    assert_eq!(order.history.len(), 9);

    let options: Vec<OrderStatus> = system
        .order_client
        .available_transitions(id)
        .await
        .unwrap()
        .into_iter()
        .map(|option| option.code)
        .collect();
    assert_eq!(options, vec![OrderStatus::Returned]);

    advance(&system, id, &[OrderStatus::Returned, OrderStatus::Refunded]).await;
    let err = system
        .order_client
        .request_transition(id, OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::Transition(TransitionError::IllegalTransition {
            from: OrderStatus::Refunded,
            ..
        })
    ));

    // Placed, 9 status changes, proof, receipt, returned, refunded.
    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert_eq!(received.len(), 14);
    assert!(matches!(received[0], OrderEvent::Placed { .. }));
    assert!(received
        .iter()
        .any(|e| matches!(e, OrderEvent::ReceiptConfirmed { at, .. } if *at == confirmed_at)));

    system.shutdown().await.expect("Failed to shut down");
}

/// Concurrent requests against one order are decided one at a time: exactly one buyer
/// submission moves the order to validation, the rest see the new status and are refused.
#[tokio::test]
async fn test_concurrent_requests_on_one_order_are_serialised() {
    let system = OrderSystem::new(&SystemConfig::default()).unwrap();
    let id = system
        .order_client
        .place_order(checkout("buyer_1", 99_000))
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let client = system.order_client.clone();
        tasks.push(tokio::spawn(async move {
            client.request_transition(id, OrderStatus::Validation).await
        }));
    }

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(transition) => {
                assert_eq!(transition.from(), OrderStatus::Pending);
                accepted += 1;
            }
            Err(err) => assert_eq!(
                err,
                OrderError::Transition(TransitionError::IllegalTransition {
                    from: OrderStatus::Validation,
                    to: OrderStatus::Validation,
                })
            ),
        }
    }
    assert_eq!(accepted, 1);

    let order = system.order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.history.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_listing_by_status_and_buyer() {
    let system = OrderSystem::new(&SystemConfig::default()).unwrap();
    let client = &system.order_client;

    let first = client.place_order(checkout("buyer_a", 10_000)).await.unwrap();
    let second = client.place_order(checkout("buyer_b", 20_000)).await.unwrap();
    let third = client.place_order(checkout("buyer_a", 30_000)).await.unwrap();

    advance(&system, second, &[OrderStatus::Validation]).await;
    advance(&system, third, &[OrderStatus::Cancelled]).await;

    let pending: Vec<OrderId> = client
        .orders_with_status(OrderStatus::Pending)
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(pending, vec![first]);

    let for_a: Vec<OrderId> = client
        .orders_for_buyer("buyer_a")
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(for_a, vec![first, third]);

    let cancelled_for_b = client
        .list(OrderQuery {
            status: Some(OrderStatus::Cancelled),
            buyer_id: Some("buyer_b".to_string()),
        })
        .await
        .unwrap();
    assert!(cancelled_for_b.is_empty());

    assert_eq!(client.list(OrderQuery::default()).await.unwrap().len(), 3);

    system.shutdown().await.unwrap();
}

#[test]
fn test_zero_capacity_config_is_rejected() {
    let config = SystemConfig {
        order_buffer_size: 0,
        ..SystemConfig::default()
    };
    assert!(OrderSystem::new(&config).is_err());
}
