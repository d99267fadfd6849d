//! Error types for order creation.

use crate::customer_actor::CustomerError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why an order was not created.
///
/// The first four variants are business-rule rejections and carry the ids
/// the caller needs to fix the request. The rest wrap collaborator failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    /// No customer has the given id.
    #[error("This customer does not exists: {customer_id}")]
    CustomerNotFound { customer_id: String },

    /// At least one requested quantity was zero or negative.
    #[error("You can't set quantities less than one: {product_ids:?}")]
    InvalidQuantity { product_ids: Vec<String> },

    /// The catalog resolved fewer products than were requested. `product_ids`
    /// lists requested ids that did not resolve; it is empty when the
    /// mismatch comes from an id listed twice.
    #[error("There are one or more products that are not found: {product_ids:?}")]
    ProductsNotFound { product_ids: Vec<String> },

    /// At least one resolved product cannot cover a requested quantity
    /// under the configured [`StockCheck`](super::StockCheck).
    #[error("There are one or more products that are out of stock: {product_ids:?}")]
    OutOfStock { product_ids: Vec<String> },

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),
}
