//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter whose
//! level comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per state change
//! RUST_LOG=debug cargo run    # plus request payloads
//! RUST_LOG=order_service::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the entity type
//! - **Entity operations**: `Created`, `Updated`, `Action ok`, and `warn!`
//!   lines for anything an actor refused
//! - **Order creation**: the `execute` span, one `warn!` per rejected
//!   order naming the offending ids, and an `error!` if the order could not
//!   be stored after stock was taken
//!
//! ## Workflow Trace Example
//!
//! With `RUST_LOG=info`, a successful order reads as below. Actors run on
//! their own tasks, so their lines carry no caller span; only the service and
//! client lines sit under `execute`.
//!
//! ```text
//! INFO Action ok entity_type="Product" id=product_1
//! INFO execute{customer_id="customer_1" requested=1 stock_check=cross_product}: Stock decremented products=1
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO execute{...}:create_order{customer_id=customer_1 lines=1}: Order stored order_id=order_1
//! INFO execute{customer_id="customer_1" requested=1 stock_check=cross_product}: Order created order_id=order_1 total=60.0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .init();
}
