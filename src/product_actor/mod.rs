//! # Product Actor
//!
//! Owns the catalog and its stock levels.
//!
//! Besides CRUD, products accept two custom actions:
//!
//! ```rust,ignore
//! // Read the current stock level
//! let stock = product_client.check_stock(product_id).await?;
//!
//! // Take units out of stock, returning the updated product
//! let product = product_client.decrement_stock(product_id, 3).await?;
//! ```
//!
//! A decrement that would take stock below zero is refused by the actor,
//! and since the actor handles one request at a time the check and the
//! subtraction cannot interleave with another decrement.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and its client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || {
        let id = product_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("product_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_id);
    (actor, ProductClient::new(generic_client))
}
