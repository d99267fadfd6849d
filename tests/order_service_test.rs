use order_service::clients::{CustomerClient, OrderClient, ProductClient};
use order_service::create_order::{CreateOrderError, CreateOrderService, StockCheck};
use order_service::framework::mock::MockClient;
use order_service::framework::FrameworkError;
use order_service::model::{Customer, Order, OrderLineItem, Product, ProductRequest};
use order_service::product_actor::{ProductActionResult, ProductError};

struct Mocks {
    customers: MockClient<Customer>,
    products: MockClient<Product>,
    orders: MockClient<Order>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            customers: MockClient::new(),
            products: MockClient::new(),
            orders: MockClient::new(),
        }
    }

    fn service(&self) -> CreateOrderService<CustomerClient, ProductClient, OrderClient> {
        CreateOrderService::new(
            CustomerClient::new(self.customers.client()),
            ProductClient::new(self.products.client()),
            OrderClient::new(self.orders.client()),
            StockCheck::CrossProduct,
        )
    }

    fn verify(&self) {
        self.customers.verify();
        self.products.verify();
        self.orders.verify();
    }
}

fn alice() -> Customer {
    Customer::new("customer_1", "Alice", "alice@example.com")
}

/// Real service and clients, mocked actors: checks the exact request
/// sequence a successful order sends.
#[tokio::test]
async fn test_service_with_mocked_actors() {
    let mut mocks = Mocks::new();
    let line = OrderLineItem {
        product_id: "product_1".to_string(),
        price: 20.0,
        quantity: 3,
    };

    mocks.customers.expect_get("customer_1".to_string()).return_ok(Some(alice()));
    mocks
        .products
        .expect_get_many()
        .return_ok(vec![Product::new("product_1", "Mug", 20.0, 10)]);
    mocks
        .products
        .expect_action("product_1".to_string())
        .return_ok(ProductActionResult::DecrementStock(Product::new("product_1", "Mug", 20.0, 7)));
    mocks.orders.expect_create().return_ok("order_1".to_string());
    mocks
        .orders
        .expect_get("order_1".to_string())
        .return_ok(Some(Order::new("order_1", alice(), vec![line.clone()])));

    let order = mocks
        .service()
        .execute("customer_1", &[ProductRequest::new("product_1", 3)])
        .await
        .expect("order should be created");

    assert_eq!(order.id, "order_1");
    assert_eq!(order.products, vec![line]);
    mocks.verify();
}

#[tokio::test]
async fn test_unknown_customer_touches_nothing_else() {
    let mut mocks = Mocks::new();
    mocks.customers.expect_get("customer_9".to_string()).return_ok(None);

    let err = mocks
        .service()
        .execute("customer_9", &[ProductRequest::new("product_1", 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, CreateOrderError::CustomerNotFound { .. }));
    // Any product or order request would have panicked the mock and
    // surfaced as an error other than CustomerNotFound.
    mocks.verify();
}

#[tokio::test]
async fn test_customer_actor_down_is_reported() {
    let mut mocks = Mocks::new();
    mocks
        .customers
        .expect_get("customer_1".to_string())
        .return_err(FrameworkError::ActorClosed);

    let err = mocks
        .service()
        .execute("customer_1", &[ProductRequest::new("product_1", 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, CreateOrderError::Customer(_)));
    mocks.verify();
}

#[tokio::test]
async fn test_lost_decrement_race_surfaces_product_error() {
    let mut mocks = Mocks::new();
    mocks.customers.expect_get("customer_1".to_string()).return_ok(Some(alice()));
    mocks
        .products
        .expect_get_many()
        .return_ok(vec![Product::new("product_1", "Mug", 20.0, 3)]);
    mocks
        .products
        .expect_action("product_1".to_string())
        .return_err(FrameworkError::Custom("Insufficient stock: requested 3, available 1".to_string()));

    let err = mocks
        .service()
        .execute("customer_1", &[ProductRequest::new("product_1", 3)])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CreateOrderError::Product(ProductError::Rejected(
            "Insufficient stock: requested 3, available 1".to_string()
        ))
    );
    mocks.verify();
}
