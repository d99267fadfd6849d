//! # Order Client
//!
//! High-level API for the Order actor. Also serves as the [`OrderStore`]
//! used by order creation.
use crate::clients::actor_client::ActorClient;
use crate::create_order::OrderStore;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation happens before an order gets here, in
/// [`CreateOrderService`](crate::create_order::CreateOrderService).
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores an order and returns it as persisted (with its id).
    #[instrument(skip(self, params), fields(customer_id = %params.customer.id, lines = params.products.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order stored");

        self.get(id.clone())
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Looks up a previously created order.
    pub async fn find_order(&self, id: &str) -> Result<Option<Order>, OrderError> {
        self.get(id.to_string()).await
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
            FrameworkError::Custom(msg) => OrderError::Rejected(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        self.create_order(order).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Customer, OrderLineItem};

    fn order_create() -> OrderCreate {
        OrderCreate {
            customer: Customer::new("customer_1", "Ana", "ana@x.io"),
            products: vec![OrderLineItem {
                product_id: "product_1".to_string(),
                price: 20.0,
                quantity: 3,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_stored_order() {
        let mut mock = MockClient::<Order>::new();
        let params = order_create();
        let stored = Order::new("order_1", params.customer.clone(), params.products.clone());
        mock.expect_create().return_ok("order_1".to_string());
        mock.expect_get("order_1".to_string()).return_ok(Some(stored.clone()));

        let client = OrderClient::new(mock.client());
        let order = client.create_order(params).await.unwrap();

        assert_eq!(order, stored);
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_order_vanished_after_create_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok("order_1".to_string());
        mock.expect_get("order_1".to_string()).return_ok(None);

        let client = OrderClient::new(mock.client());
        let err = client.create_order(order_create()).await.unwrap_err();

        assert_eq!(err, OrderError::NotFound("order_1".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_order_maps_closed_actor() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        let err = client.create_order(order_create()).await.unwrap_err();

        assert_eq!(err, OrderError::ActorCommunicationError("Actor closed".to_string()));
    }
}
