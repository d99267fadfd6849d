//! Entity trait implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;

fn check_price(price: f64) -> Result<f64, String> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(format!("Invalid price: {}", price))
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        let price = check_price(params.price)?;
        Ok(Self::new(id, params.name, price, params.quantity))
    }

    /// # Fields Updated
    /// - `price`: unit price, must be finite and non-negative
    /// - `quantity`: stock level, replaced as given
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::DecrementStock(amount) => {
                self.quantity = self.quantity.checked_sub(amount).ok_or_else(|| {
                    format!(
                        "Insufficient stock: requested {}, available {}",
                        amount, self.quantity
                    )
                })?;
                Ok(ProductActionResult::DecrementStock(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decrement_returns_updated_product() {
        let mut product = Product::new("product_1", "Mug", 20.0, 10);
        let result = product
            .handle_action(ProductAction::DecrementStock(3), &())
            .await
            .unwrap();
        assert_eq!(
            result,
            ProductActionResult::DecrementStock(Product::new("product_1", "Mug", 20.0, 7))
        );
    }

    #[tokio::test]
    async fn test_decrement_below_zero_leaves_stock_untouched() {
        let mut product = Product::new("product_1", "Mug", 20.0, 2);
        let err = product
            .handle_action(ProductAction::DecrementStock(3), &())
            .await
            .unwrap_err();
        assert_eq!(err, "Insufficient stock: requested 3, available 2");
        assert_eq!(product.quantity, 2);
    }

    #[tokio::test]
    async fn test_update_rejects_negative_price() {
        let mut product = Product::new("product_1", "Mug", 20.0, 2);
        let update = ProductUpdate {
            price: Some(-1.0),
            quantity: Some(50),
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.price, 20.0);
    }

    #[test]
    fn test_from_create_params_rejects_nan_price() {
        let params = ProductCreate {
            name: "Mug".to_string(),
            price: f64::NAN,
            quantity: 1,
        };
        assert!(Product::from_create_params("product_1".to_string(), params).is_err());
    }
}
