//! # Product Client
//!
//! High-level API for the Product actor. Also serves as the
//! [`ProductCatalog`] used by order creation.
use crate::clients::actor_client::ActorClient;
use crate::create_order::ProductCatalog;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductRequest, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Custom(msg) => ProductError::Rejected(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Changes price and/or stock level, returning the updated product.
    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, update: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the quantity available.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected_result(other)),
        }
    }

    /// Takes `quantity` units out of stock, returning the product afterwards.
    ///
    /// Fails with [`ProductError::Rejected`] if that would take stock below zero.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: String, quantity: u32) -> Result<Product, ProductError> {
        debug!("Decrementing {} units of product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::DecrementStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::DecrementStock(product) => Ok(product),
            other => Err(unexpected_result(other)),
        }
    }
}

fn unexpected_result(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self, requests), fields(requested = requests.len()))]
    async fn find_all_by_id(&self, requests: &[ProductRequest]) -> Result<Vec<Product>, ProductError> {
        let ids = requests.iter().map(|request| request.id.clone()).collect();
        self.inner.get_many(ids).await.map_err(Self::map_error)
    }

    /// Decrements each requested product in order. Stops at the first
    /// failure; decrements already applied are not undone.
    #[instrument(skip(self, requests), fields(requested = requests.len()))]
    async fn update_quantity(&self, requests: &[ProductRequest]) -> Result<Vec<Product>, ProductError> {
        let mut updated = Vec::with_capacity(requests.len());
        for request in requests {
            let quantity = u32::try_from(request.quantity)
                .ok()
                .filter(|quantity| *quantity > 0)
                .ok_or(ProductError::InvalidQuantity(request.quantity))?;
            updated.push(self.decrement_stock(request.id.clone(), quantity).await?);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get_many, MockClient};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock("product_1".to_string()).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "product_1");
        assert_eq!(action, ProductAction::CheckStock);

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_find_all_by_id_sends_one_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let find_task = tokio::spawn(async move {
            let requests = vec![ProductRequest::new("product_1", 1), ProductRequest::new("product_2", 2)];
            product_client.find_all_by_id(&requests).await
        });

        let (ids, responder) = expect_get_many(&mut receiver)
            .await
            .expect("Expected GetMany request");
        assert_eq!(ids, vec!["product_1".to_string(), "product_2".to_string()]);

        responder
            .send(Ok(vec![Product::new("product_1", "Mug", 20.0, 10)]))
            .unwrap();

        let found = find_task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert!(receiver.try_recv().is_err(), "only one request expected");
    }

    #[tokio::test]
    async fn test_update_quantity_decrements_each_request() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action("product_1".to_string())
            .return_ok(ProductActionResult::DecrementStock(Product::new("product_1", "Mug", 20.0, 7)));
        mock.expect_action("product_2".to_string())
            .return_ok(ProductActionResult::DecrementStock(Product::new("product_2", "Cup", 5.0, 0)));

        let product_client = ProductClient::new(mock.client());
        let requests = vec![ProductRequest::new("product_1", 3), ProductRequest::new("product_2", 4)];
        let updated = product_client.update_quantity(&requests).await.unwrap();

        let levels: Vec<_> = updated.iter().map(|p| (p.id.as_str(), p.quantity)).collect();
        assert_eq!(levels, vec![("product_1", 7), ("product_2", 0)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_quantity_rejects_non_positive_without_calling_actor() {
        let mock = MockClient::<Product>::new();
        let product_client = ProductClient::new(mock.client());

        let err = product_client
            .update_quantity(&[ProductRequest::new("product_1", 0)])
            .await
            .unwrap_err();

        assert_eq!(err, ProductError::InvalidQuantity(0));
        mock.verify();
    }

    #[tokio::test]
    async fn test_decrement_stock_insufficient_stock() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action("product_1".to_string())
            .return_err(FrameworkError::Custom("Insufficient stock: requested 100, available 10".to_string()));

        let product_client = ProductClient::new(mock.client());
        let err = product_client
            .decrement_stock("product_1".to_string(), 100)
            .await
            .unwrap_err();

        match err {
            ProductError::Rejected(msg) => assert!(msg.contains("Insufficient stock")),
            other => panic!("Expected Rejected, got {:?}", other),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_product_returns_updated_product() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update("product_1".to_string())
            .return_ok(Product::new("product_1", "Mug", 18.0, 25));

        let product_client = ProductClient::new(mock.client());
        let update = ProductUpdate {
            price: Some(18.0),
            quantity: Some(25),
        };
        let product = product_client
            .update_product("product_1".to_string(), update)
            .await
            .unwrap();

        assert_eq!(product.price, 18.0);
        assert_eq!(product.quantity, 25);
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_product_invalid_price_is_rejected() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update("product_1".to_string())
            .return_err(FrameworkError::Custom("Invalid price: -1".to_string()));

        let product_client = ProductClient::new(mock.client());
        let update = ProductUpdate {
            price: Some(-1.0),
            ..ProductUpdate::default()
        };
        let err = product_client
            .update_product("product_1".to_string(), update)
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Rejected(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_decrement_stock_unknown_product() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action("product_9".to_string())
            .return_err(FrameworkError::NotFound("product_9".to_string()));

        let product_client = ProductClient::new(mock.client());
        let err = product_client
            .decrement_stock("product_9".to_string(), 1)
            .await
            .unwrap_err();

        assert_eq!(err, ProductError::NotFound("product_9".to_string()));
    }
}
