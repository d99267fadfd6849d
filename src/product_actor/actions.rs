//! Custom actions for the Product actor.
//!
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`Product`](crate::model::Product).

use crate::model::Product;

/// Stock operations beyond plain CRUD.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Removes units from stock.
    ///
    /// # Errors
    /// Fails if the amount exceeds the available stock.
    DecrementStock(u32),
}

/// Results from [`ProductAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    /// The product after the decrement.
    DecrementStock(Product),
}
