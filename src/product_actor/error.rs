//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The quantity cannot be applied to stock (zero, negative or too large).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The actor refused the operation (e.g. insufficient stock, bad price).
    #[error("Product rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
