//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and turns framework errors back into [`OrderError`], so
//! callers can match on [`TransitionError`](crate::status::TransitionError) directly.
use crate::model::{Order, OrderCreate, OrderId, OrderQuery};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::status::{next_status_options, OrderStatus, StatusOption, Transition};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl OrderClient {
    /// Places a new order in `pending`.
    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Asks the order actor to move `id` to `next`, stamped with the current time.
    ///
    /// # Errors
    /// - [`OrderError::Transition`] when the status machine rejects the change
    /// - [`OrderError::NotFound`] for an unknown order
    pub async fn request_transition(
        &self,
        id: OrderId,
        next: OrderStatus,
    ) -> Result<Transition, OrderError> {
        self.request_transition_at(id, next, Utc::now()).await
    }

    /// Same as [`OrderClient::request_transition`] with an explicit request time.
    #[instrument(skip(self))]
    pub async fn request_transition_at(
        &self,
        id: OrderId,
        next: OrderStatus,
        at: DateTime<Utc>,
    ) -> Result<Transition, OrderError> {
        debug!("Requesting status change");
        match self
            .inner
            .perform_action(id, OrderAction::RequestTransition { next, at })
            .await
        {
            Ok(OrderActionResult::RequestTransition(transition)) => Ok(transition),
            Ok(_) => unreachable!("RequestTransition action must return RequestTransition result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Uploads the courier's proof of delivery for an order that is out for delivery.
    #[instrument(skip(self))]
    pub async fn attach_delivery_proof(
        &self,
        id: OrderId,
        reference: String,
    ) -> Result<(), OrderError> {
        debug!("Attaching delivery proof");
        match self
            .inner
            .perform_action(
                id,
                OrderAction::AttachDeliveryProof {
                    reference,
                    at: Utc::now(),
                },
            )
            .await
        {
            Ok(OrderActionResult::AttachDeliveryProof(_)) => Ok(()),
            Ok(_) => unreachable!("AttachDeliveryProof action must return AttachDeliveryProof result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Records the buyer's confirmation that a delivered order arrived.
    ///
    /// Returns the confirmation time.
    #[instrument(skip(self))]
    pub async fn confirm_receipt(&self, id: OrderId) -> Result<DateTime<Utc>, OrderError> {
        debug!("Confirming receipt");
        match self
            .inner
            .perform_action(id, OrderAction::ConfirmReceipt { at: Utc::now() })
            .await
        {
            Ok(OrderActionResult::ConfirmReceipt(at)) => Ok(at),
            Ok(_) => unreachable!("ConfirmReceipt action must return ConfirmReceipt result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.list(OrderQuery::with_status(status)).await
    }

    pub async fn orders_for_buyer(&self, buyer_id: &str) -> Result<Vec<Order>, OrderError> {
        self.list(OrderQuery::for_buyer(buyer_id)).await
    }

    /// Status picker options for the order's current status.
    #[instrument(skip(self))]
    pub async fn available_transitions(&self, id: OrderId) -> Result<Vec<StatusOption>, OrderError> {
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        Ok(next_status_options(order.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{request_transition, Precondition, TransitionError};
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 17, 8, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_request_transition_sends_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .request_transition_at(OrderId(4), OrderStatus::Paid, at())
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(4));
        assert!(matches!(
            action,
            OrderAction::RequestTransition {
                next: OrderStatus::Paid,
                ..
            }
        ));

        let mut order = Order::new(OrderId(4), "buyer_1", 75_000, at());
        order.status = OrderStatus::Validation;
        let transition = request_transition(&order, OrderStatus::Paid, at()).unwrap();
        responder
            .send(Ok(OrderActionResult::RequestTransition(transition)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), transition);
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(2))
            .return_err(FrameworkError::EntityError(Box::new(OrderError::Transition(
                TransitionError::PreconditionFailed(Precondition::DeliveryProofRequired),
            ))));

        let order_client = OrderClient::new(mock.client());
        let err = order_client
            .request_transition(OrderId(2), OrderStatus::Delivered)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            OrderError::Transition(TransitionError::PreconditionFailed(
                Precondition::DeliveryProofRequired
            ))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_framework_errors_are_mapped() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(9))
            .return_err(FrameworkError::NotFound("order_9".to_string()));
        mock.expect_action(OrderId(9))
            .return_err(FrameworkError::ActorClosed);

        let order_client = OrderClient::new(mock.client());

        let missing = order_client.confirm_receipt(OrderId(9)).await.unwrap_err();
        assert_eq!(missing, OrderError::NotFound("order_9".to_string()));

        let closed = order_client.confirm_receipt(OrderId(9)).await.unwrap_err();
        assert!(matches!(closed, OrderError::ActorCommunicationError(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_available_transitions_reads_current_status() {
        let mut mock = MockClient::<Order>::new();
        let mut order = Order::new(OrderId(1), "buyer_1", 50_000, at());
        order.status = OrderStatus::OutForDelivery;
        mock.expect_get(OrderId(1)).return_ok(Some(order));
        mock.expect_get(OrderId(2)).return_ok(None);

        let order_client = OrderClient::new(mock.client());

        let codes: Vec<OrderStatus> = order_client
            .available_transitions(OrderId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|option| option.code)
            .collect();
        assert_eq!(
            codes,
            vec![OrderStatus::Delivered, OrderStatus::FailedDelivery]
        );

        let missing = order_client
            .available_transitions(OrderId(2))
            .await
            .unwrap_err();
        assert_eq!(missing, OrderError::NotFound("order_2".to_string()));
        mock.verify();
    }
}
