//! Collaborators required by [`CreateOrderService`](super::CreateOrderService).

use crate::customer_actor::CustomerError;
use crate::model::{Customer, Order, OrderCreate, Product, ProductRequest};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Resolves customers by id.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, CustomerError>;
}

/// Reads and decrements catalog stock.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns the products whose ids appear in `requests`. Unknown ids are
    /// left out, so the result may be shorter than the input.
    async fn find_all_by_id(&self, requests: &[ProductRequest]) -> Result<Vec<Product>, ProductError>;

    /// Subtracts each requested quantity from stock and returns the products
    /// as they are afterwards.
    async fn update_quantity(&self, requests: &[ProductRequest]) -> Result<Vec<Product>, ProductError>;
}

/// Persists new orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;
}
