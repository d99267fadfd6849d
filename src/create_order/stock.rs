//! Stock sufficiency rules.

use crate::model::{Product, ProductRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which (product, request) pairs the stock check compares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockCheck {
    /// Every resolved product against every requested quantity, regardless
    /// of id. A large request for one product can therefore reject an order
    /// because a different, low-stock product cannot cover it.
    #[default]
    CrossProduct,
    /// Each product only against the requests for that same product.
    PerProduct,
}

impl StockCheck {
    /// Ids of resolved products that fail the check, in `resolved` order.
    /// Empty means every product has enough stock.
    pub fn out_of_stock(self, resolved: &[Product], requested: &[ProductRequest]) -> Vec<String> {
        resolved
            .iter()
            .filter(|product| {
                requested
                    .iter()
                    .filter(|request| self.compares(product, request))
                    .any(|request| i64::from(product.quantity) - request.quantity < 0)
            })
            .map(|product| product.id.clone())
            .collect()
    }

    fn compares(self, product: &Product, request: &ProductRequest) -> bool {
        match self {
            StockCheck::CrossProduct => true,
            StockCheck::PerProduct => product.id == request.id,
        }
    }
}

impl fmt::Display for StockCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockCheck::CrossProduct => write!(f, "cross_product"),
            StockCheck::PerProduct => write!(f, "per_product"),
        }
    }
}

impl FromStr for StockCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cross_product" => Ok(StockCheck::CrossProduct),
            "per_product" => Ok(StockCheck::PerProduct),
            other => Err(format!("unknown stock check: {}", other)),
        }
    }
}
