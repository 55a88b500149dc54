use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Order, Trade};
use crate::values::Price;

/// Best resting order on each side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopOfBook {
    pub best_bid: Option<Order>,
    pub best_ask: Option<Order>,
}

impl TopOfBook {
    /// Spread between best ask and best bid
    pub fn spread(&self) -> Option<Price> {
        match (&self.best_bid, &self.best_ask) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Mid price between best bid and ask
    pub fn mid_price(&self) -> Option<Price> {
        match (&self.best_bid, &self.best_ask) {
            (Some(bid), Some(ask)) => Some((bid.price + ask.price) / Decimal::TWO),
            _ => None,
        }
    }
}

/// Owned copy of the whole book and its trade log
///
/// Bids and asks are listed best-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSnapshot {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
    pub trades: Vec<Trade>,
}

impl BookSnapshot {
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
