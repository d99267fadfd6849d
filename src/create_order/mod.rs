//! # Order Creation
//!
//! The "create an order" use case: check the customer, check the requested
//! quantities, check stock, take the stock and store the order.
//!
//! [`CreateOrderService`] only talks to its collaborators through the traits
//! in [`ports`], so it runs the same against the actor-backed clients, the
//! [`MockClient`](crate::framework::mock::MockClient)-backed ones, or an
//! in-memory fake.
//!
//! ```rust,ignore
//! let service = CreateOrderService::new(customer_client, product_client, order_client, StockCheck::CrossProduct);
//! let order = service
//!     .execute("customer_1", &[ProductRequest::new("product_1", 3)])
//!     .await?;
//! ```
//!
//! ## Known gaps
//!
//! - Stock is checked and then decremented in two separate calls, so two
//!   concurrent orders may both pass the check. The product actor still
//!   refuses to go below zero, which turns the loser into a
//!   [`CreateOrderError::Product`] failure.
//! - If storing the order fails after stock was taken, the stock is not
//!   given back. The failure is logged with the affected product ids.

pub mod error;
pub mod ports;
pub mod service;
pub mod stock;

pub use error::*;
pub use ports::*;
pub use service::*;
pub use stock::*;
