use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Order;
use crate::values::Price;

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Price-time priority between two orders resting on this side.
    ///
    /// `Ordering::Less` means `a` trades before `b`: bids rank the highest
    /// price first, asks the lowest, and equal prices fall back to the
    /// earlier timestamp. Fully equal keys compare `Equal` so that a stable
    /// sort keeps arrival order.
    pub fn priority(&self, a: &Order, b: &Order) -> Ordering {
        let by_price = match self {
            Side::Buy => b.price.cmp(&a.price),
            Side::Sell => a.price.cmp(&b.price),
        };
        by_price.then_with(|| a.timestamp.cmp(&b.timestamp))
    }

    /// Whether an order resting on this side at `resting` is reachable by a
    /// taker whose limit is `limit`.
    pub fn crosses(&self, resting: Price, limit: Price) -> bool {
        match self {
            // Bids are sold into down to the seller's limit
            Side::Buy => resting >= limit,
            // Asks are bought up to the buyer's limit
            Side::Sell => resting <= limit,
        }
    }
}
