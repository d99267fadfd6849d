//! # Order Service
//!
//! > **"Create an order" for an e-commerce backend, on resource-oriented actors.**
//!
//! The heart of the crate is [`CreateOrderService`](create_order::CreateOrderService):
//! given a customer id and a list of (product id, quantity) pairs it checks the
//! customer, the quantities and the stock, takes the stock and stores an
//! order with one line item per product.
//!
//! The service depends on three traits ([`CustomerLookup`](create_order::CustomerLookup),
//! [`ProductCatalog`](create_order::ProductCatalog), [`OrderStore`](create_order::OrderStore)).
//! In this crate they are backed by in-process actors, one Tokio task per
//! resource kind.
//!
//! ## Module Tour
//!
//! ### 1. The Use Case ([`create_order`])
//! - **Role**: Validation pipeline and the collaborator traits it needs.
//! - **Key items**: [`CreateOrderService`](create_order::CreateOrderService),
//!   [`CreateOrderError`](create_order::CreateOrderError), [`StockCheck`](create_order::StockCheck).
//!
//! ### 2. The Engine ([`framework`])
//! - **Role**: Separates the *business logic* (your entity) from the *plumbing*
//!   (channels, message loop, error mapping).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: Composition root that spawns the actors and wires the service.
//! - **Key items**: [`OrderSystem`](lifecycle::OrderSystem), [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: Typed wrappers over `ResourceClient`, each implementing one collaborator trait.
//! - **Key items**: [`CustomerClient`](clients::CustomerClient), [`ProductClient`](clients::ProductClient),
//!   [`OrderClient`](clients::OrderClient).
//!
//! ### 5. The Resources ([`customer_actor`], [`product_actor`], [`order_actor`])
//! - **Role**: Concrete [`ActorEntity`](framework::ActorEntity) implementations and their error types.
//!
//! ## Error Handling
//! Each resource has its own `thiserror` enum. [`CreateOrderError`](create_order::CreateOrderError)
//! tags business-rule rejections with the offending ids and wraps resource
//! errors via `#[from]`.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod create_order;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
