//! Runtime configuration for [`OrderSystem`](super::OrderSystem).
//!
//! Defaults work out of the box; environment variables override them:
//!
//! | Variable                       | Field            | Values                          |
//! |--------------------------------|------------------|---------------------------------|
//! | `ORDER_SERVICE_CHANNEL_BUFFER` | `channel_buffer` | positive integer                |
//! | `ORDER_SERVICE_STOCK_CHECK`    | `stock_check`    | `cross_product`, `per_product`  |
//!
//! Log levels are not configured here; see [`setup_tracing`](super::setup_tracing).

use crate::create_order::StockCheck;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CHANNEL_BUFFER_VAR: &str = "ORDER_SERVICE_CHANNEL_BUFFER";
pub const STOCK_CHECK_VAR: &str = "ORDER_SERVICE_STOCK_CHECK";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Request queue length of each actor.
    pub channel_buffer: usize,
    /// Stock rule used by order creation.
    pub stock_check: StockCheck,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            stock_check: StockCheck::default(),
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_BUFFER_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.channel_buffer = size,
                _ => warn!(var = CHANNEL_BUFFER_VAR, value = %raw, "Ignoring invalid channel buffer"),
            }
        }

        if let Some(raw) = lookup(STOCK_CHECK_VAR) {
            match raw.parse::<StockCheck>() {
                Ok(stock_check) => config.stock_check = stock_check,
                Err(e) => warn!(var = STOCK_CHECK_VAR, error = %e, "Ignoring invalid stock check"),
            }
        }

        config
    }
}
