use crate::model::Customer;
use serde::{Deserialize, Serialize};

/// A placed order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Orders are write-once: there are no updates and no custom actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub products: Vec<OrderLineItem>,
}

/// A product line frozen at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: String,
    /// Unit price captured when the order was placed.
    pub price: f64,
    pub quantity: i64,
}

/// Payload for persisting a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: Customer,
    pub products: Vec<OrderLineItem>,
}

impl Order {
    pub fn new(id: impl Into<String>, customer: Customer, products: Vec<OrderLineItem>) -> Self {
        Self {
            id: id.into(),
            customer,
            products,
        }
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> f64 {
        self.products
            .iter()
            .map(|line| line.price * line.quantity as f64)
            .sum()
    }
}
