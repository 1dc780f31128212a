//! The [`OrderSystem`] orchestrator: starts the order actor and shuts it down.

use super::config::{ConfigError, SystemConfig};
use crate::clients::OrderClient;
use crate::order_actor::{self, OrderEvent, OrderEvents};
use tokio::sync::broadcast;
use tracing::{error, info};

/// The runtime orchestrator for the order lifecycle service.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting the order actor and stopping it on shutdown
/// - **Dependency Wiring**: injecting the event publisher into the order actor
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&SystemConfig::default())?;
/// let mut events = system.subscribe();
///
/// let id = system.order_client.place_order(checkout).await?;
/// system.order_client.request_transition(id, OrderStatus::Validation).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    events: OrderEvents,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates the order actor and starts it with a fresh event publisher.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// [`ConfigError`] if `config` has a zero channel size.
    pub fn new(config: &SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let events = OrderEvents::new(config.event_capacity);
        let (order_actor, order_client) = order_actor::new(config.order_buffer_size);

        let order_handle = tokio::spawn(order_actor.run(events.clone()));
        info!(
            order_buffer_size = config.order_buffer_size,
            event_capacity = config.event_capacity,
            "Order system started"
        );

        Ok(Self {
            order_client,
            events,
            handles: vec![order_handle],
        })
    }

    /// Receiver for every order event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.events.subscribe()
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client so the actor's channel closes, then waits for the actor task. Clones
    /// of the client held elsewhere keep the actor alive until they are dropped too. Event
    /// receivers see `Closed` once the actor has stopped.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.events);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
