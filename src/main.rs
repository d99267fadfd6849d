//! Demo: registers a customer and two products, places an order, shows each
//! way an order can be rejected, then places an order whose outcome depends on
//! the configured stock check.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_SERVICE_STOCK_CHECK=per_product RUST_LOG=info cargo run
//! ```

use order_service::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use order_service::model::{CustomerCreate, ProductCreate, ProductRequest};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting application");
    let system = OrderSystem::with_config(config);

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .instrument(tracing::info_span!("customer_creation"))
        .await
        .map_err(|e| e.to_string())?;
    info!(customer_id = %customer_id, "Customer created successfully");

    let mug = system
        .product_client
        .create_product(ProductCreate {
            name: "Mug".to_string(),
            price: 20.0,
            quantity: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let spoon = system
        .product_client
        .create_product(ProductCreate {
            name: "Spoon".to_string(),
            price: 2.5,
            quantity: 5,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%mug, %spoon, "Products created successfully");

    let span = tracing::info_span!("order_processing");
    let order = system
        .create_order
        .execute(&customer_id, &[ProductRequest::new(mug.clone(), 3), ProductRequest::new(spoon.clone(), 1)])
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, total = order.total(), "Order processed successfully");

    let rejected = [
        ("unknown customer", "customer_404".to_string(), vec![ProductRequest::new(mug.clone(), 1)]),
        ("zero quantity", customer_id.clone(), vec![ProductRequest::new(mug.clone(), 0)]),
        ("unknown product", customer_id.clone(), vec![ProductRequest::new("product_404", 1)]),
        ("too many spoons", customer_id.clone(), vec![ProductRequest::new(spoon.clone(), 6)]),
    ];
    for (case, customer, products) in rejected {
        match system.create_order.execute(&customer, &products).await {
            Ok(order) => warn!(case, order_id = %order.id, "Order unexpectedly accepted"),
            Err(e) => info!(case, error = %e, "Order rejected"),
        }
    }

    // Spoon stock (4) covers its own request but not the mug's, so only
    // the per-product check accepts this one.
    let stock_check = system.create_order.stock_check();
    let policy_dependent = [ProductRequest::new(mug.clone(), 5), ProductRequest::new(spoon.clone(), 1)];
    match system.create_order.execute(&customer_id, &policy_dependent).await {
        Ok(order) => info!(%stock_check, order_id = %order.id, "Policy-dependent order accepted"),
        Err(e) => info!(%stock_check, error = %e, "Policy-dependent order rejected"),
    }

    let stock = system
        .product_client
        .check_stock(mug)
        .await
        .map_err(|e| e.to_string())?;
    info!(stock, "Mug stock after orders");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
