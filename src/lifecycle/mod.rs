//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the actors behind order creation.
//!
//! - [`OrderSystem`] - composition root: spawns the customer, product and order
//!   actors and builds [`CreateOrderService`](crate::create_order::CreateOrderService)
//!   from their clients.
//! - [`SystemConfig`] - channel sizes and the stock rule, with environment overrides.
//! - [`setup_tracing`] - installs the global `tracing` subscriber.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! The service holds clones of the clients, so it is dropped along with them.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use order_system::*;
pub use self::tracing::*;
