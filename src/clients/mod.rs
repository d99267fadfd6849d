//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client also implements the collaborator trait that
//! [`CreateOrderService`](crate::create_order::CreateOrderService) depends on.

pub mod actor_client;
pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use actor_client::*;
pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
