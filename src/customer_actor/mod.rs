//! # Customer Actor
//!
//! The simplest resource in the system: customers are registered and looked
//! up, nothing else. There are no dependencies (`Context = ()`) and no
//! custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_service::customer_actor;
//! use order_service::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_customer(CustomerCreate {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(id, "customer_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::Customer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let customer_id_counter = Arc::new(AtomicU64::new(1));
    let next_customer_id = move || {
        let id = customer_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("customer_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_customer_id);
    (actor, CustomerClient::new(generic_client))
}
