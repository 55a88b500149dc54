use minibook_core::{OrderId, Price, Quantity, Timestamp, Trade};

/// Append-only record of every fill the engine has produced
#[derive(Debug, Clone, Default)]
pub struct TradeLog {
    trades: Vec<Trade>,
}

impl TradeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fill and hand back a copy of the stored trade
    pub fn record_trade(
        &mut self,
        buy_order_id: impl Into<OrderId>,
        sell_order_id: impl Into<OrderId>,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> Trade {
        let trade = Trade::new_with_time(buy_order_id, sell_order_id, price, quantity, timestamp);
        self.trades.push(trade.clone());
        trade
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn clear(&mut self) {
        self.trades.clear();
    }
}
