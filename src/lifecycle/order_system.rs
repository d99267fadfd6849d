use super::config::SystemConfig;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::create_order::CreateOrderService;
use tracing::{error, info};

/// The service as wired by [`OrderSystem`].
pub type OrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// Composition root of the order backend.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the customer, product and order actors
/// - **Dependency Wiring**: Handing the actor clients to [`CreateOrderService`]
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let customer_id = system.customer_client.create_customer(customer).await?;
/// let product_id = system.product_client.create_product(product).await?;
/// let order = system
///     .create_order
///     .execute(&customer_id, &[ProductRequest::new(product_id, 3)])
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// The "create an order" use case, wired to the actors below.
    pub create_order: OrderService,

    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`].
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Spawns one task per actor and wires the service.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: SystemConfig) -> Self {
        info!(?config, "Starting order system");

        let (customer_actor, customer_client) = crate::customer_actor::new(config.channel_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        // None of the actors has dependencies (Context = ())
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        let create_order = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
            config.stock_check,
        );

        Self {
            create_order,
            customer_client,
            product_client,
            order_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client (including the service's copies) closes the
    /// actors' channels; each actor then leaves its loop and its task ends.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.create_order);
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

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

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
