use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::{OrderId, Price, Quantity, Timestamp};

/// Unique identifier for a trade
pub type TradeId = Uuid;

/// Fill between one buy order and one sell order
///
/// The price is always the resting (maker) order's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: TradeId,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: Timestamp,
}

impl Trade {
    /// Create a new trade with explicit timestamp
    pub fn new_with_time(
        buy_order_id: impl Into<OrderId>,
        sell_order_id: impl Into<OrderId>,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            buy_order_id: buy_order_id.into(),
            sell_order_id: sell_order_id.into(),
            price,
            quantity,
            timestamp,
        }
    }

    /// Create a new trade using current system time
    pub fn new(
        buy_order_id: impl Into<OrderId>,
        sell_order_id: impl Into<OrderId>,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self::new_with_time(buy_order_id, sell_order_id, price, quantity, Utc::now())
    }

    /// Returns the notional value of the trade (price * quantity)
    pub fn notional(&self) -> Price {
        self.price * self.quantity
    }
}
