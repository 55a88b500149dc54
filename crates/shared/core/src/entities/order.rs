use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderKind, Side};
use crate::values::{OrderId, Price, Quantity, Timestamp};

/// An order as submitted by a caller and, if it rests, as held by the book
///
/// `quantity` is the open quantity: the book decrements it in place as
/// fills occur and drops the order once it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    /// Limit price; ignored for market orders
    #[serde(default)]
    pub price: Price,
    pub quantity: Quantity,
    /// Creation instant, used as the time-priority tie-break
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: Timestamp,
}

impl Order {
    /// Create a new order with explicit timestamp
    pub fn new_with_time(
        id: impl Into<OrderId>,
        kind: OrderKind,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            price,
            quantity,
            timestamp,
        }
    }

    /// Create a new order stamped with the current system time
    pub fn new(id: impl Into<OrderId>, kind: OrderKind, price: Price, quantity: Quantity) -> Self {
        Self::new_with_time(id, kind, price, quantity, Utc::now())
    }

    pub fn limit_buy(id: impl Into<OrderId>, price: Price, quantity: Quantity) -> Self {
        Self::new(id, OrderKind::LimitBuy, price, quantity)
    }

    pub fn limit_sell(id: impl Into<OrderId>, price: Price, quantity: Quantity) -> Self {
        Self::new(id, OrderKind::LimitSell, price, quantity)
    }

    pub fn market_buy(id: impl Into<OrderId>, quantity: Quantity) -> Self {
        Self::new(id, OrderKind::MarketBuy, Decimal::ZERO, quantity)
    }

    pub fn market_sell(id: impl Into<OrderId>, quantity: Quantity) -> Self {
        Self::new(id, OrderKind::MarketSell, Decimal::ZERO, quantity)
    }

    /// Replace the creation timestamp
    pub fn at(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn side(&self) -> Side {
        self.kind.side()
    }

    pub fn is_market(&self) -> bool {
        self.kind.is_market()
    }

    pub fn is_limit(&self) -> bool {
        self.kind.is_limit()
    }

    /// Returns true once nothing is left to fill
    pub fn is_filled(&self) -> bool {
        self.quantity <= Decimal::ZERO
    }
}
