use super::error::CreateOrderError;
use super::ports::{CustomerLookup, OrderStore, ProductCatalog};
use super::stock::StockCheck;
use crate::model::{Order, OrderCreate, OrderLineItem, Product, ProductRequest};
use tracing::{debug, error, info, instrument, warn};

/// Creates orders from a customer id and a list of requested products.
///
/// Stateless apart from its collaborators, which are passed in at
/// construction. Each call is a straight pipeline: any failed check returns
/// before stock is touched.
#[derive(Clone)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    stock_check: StockCheck,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerLookup,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O, stock_check: StockCheck) -> Self {
        Self {
            customers,
            products,
            orders,
            stock_check,
        }
    }

    pub fn stock_check(&self) -> StockCheck {
        self.stock_check
    }

    /// Runs the use case.
    ///
    /// 1. The customer must exist.
    /// 2. Every quantity must be at least one (checked before the catalog is read).
    /// 3. Every requested entry must resolve to a product, in one catalog call.
    /// 4. Stock must cover the request according to [`StockCheck`].
    /// 5. Stock is decremented for the whole request in one catalog call.
    /// 6. Line items take price from the updated product and quantity from the request.
    /// 7. The order is stored and returned.
    ///
    /// Not idempotent: calling twice creates two orders and takes stock twice.
    #[instrument(skip(self, products), fields(requested = products.len(), stock_check = %self.stock_check))]
    pub async fn execute(&self, customer_id: &str, products: &[ProductRequest]) -> Result<Order, CreateOrderError> {
        debug!(?products, "execute called");

        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| {
                warn!("Customer not found");
                CreateOrderError::CustomerNotFound {
                    customer_id: customer_id.to_string(),
                }
            })?;

        let invalid: Vec<String> = products
            .iter()
            .filter(|request| request.quantity <= 0)
            .map(|request| request.id.clone())
            .collect();
        if !invalid.is_empty() {
            warn!(product_ids = ?invalid, "Non-positive quantity requested");
            return Err(CreateOrderError::InvalidQuantity { product_ids: invalid });
        }

        let found = self.products.find_all_by_id(products).await?;
        if found.len() != products.len() {
            let missing = unresolved(products, &found);
            warn!(product_ids = ?missing, found = found.len(), "Products not found");
            return Err(CreateOrderError::ProductsNotFound { product_ids: missing });
        }

        let short = self.stock_check.out_of_stock(&found, products);
        if !short.is_empty() {
            warn!(product_ids = ?short, "Out of stock");
            return Err(CreateOrderError::OutOfStock { product_ids: short });
        }

        let updated = self.products.update_quantity(products).await?;
        info!(products = updated.len(), "Stock decremented");

        let order = OrderCreate {
            customer,
            products: line_items(&updated, products),
        };
        match self.orders.create(order).await {
            Ok(order) => {
                info!(order_id = %order.id, total = order.total(), "Order created");
                Ok(order)
            }
            Err(e) => {
                let decremented: Vec<&str> = updated.iter().map(|p| p.id.as_str()).collect();
                error!(error = %e, product_ids = ?decremented, "Order not stored after stock was decremented");
                Err(e.into())
            }
        }
    }
}

/// Requested ids with no matching product, in request order.
fn unresolved(requested: &[ProductRequest], found: &[Product]) -> Vec<String> {
    requested
        .iter()
        .filter(|request| !found.iter().any(|product| product.id == request.id))
        .map(|request| request.id.clone())
        .collect()
}

/// One line per updated product. The quantity comes from the first request
/// with the same id, or 0 if none matches.
fn line_items(updated: &[Product], requested: &[ProductRequest]) -> Vec<OrderLineItem> {
    updated
        .iter()
        .map(|product| OrderLineItem {
            product_id: product.id.clone(),
            price: product.price,
            quantity: requested
                .iter()
                .find(|request| request.id == product.id)
                .map_or(0, |request| request.quantity),
        })
        .collect()
}
