use log::debug;
use minibook_core::{Order, OrderId, OrderKind, Price, Quantity, Side, Timestamp, Trade};
use minibook_ports::BookSide;
use rust_decimal::Decimal;

use crate::trade_log::TradeLog;

/// What happened to the part of an incoming order that found no match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    /// Nothing left over
    Filled,
    /// Limit order remainder now resting in the book
    Rested(Quantity),
    /// Market order remainder dropped for lack of liquidity
    Discarded(Quantity),
}

/// Outcome of matching one incoming order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub order_id: OrderId,
    pub trades: Vec<Trade>,
    pub remainder: Remainder,
}

impl Execution {
    /// Total quantity traded by the incoming order
    pub fn filled_quantity(&self) -> Quantity {
        self.trades.iter().map(|t| t.quantity).sum()
    }
}

/// Standard price-time priority matching engine (FIFO)
///
/// Orders are matched based on:
/// 1. Best price (highest bid, lowest ask)
/// 2. Time priority (earlier timestamp first at the same price)
///
/// Trades always execute at the resting (maker) order's price.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceTimeMatcher;

impl PriceTimeMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &str {
        "Price-Time Priority"
    }

    /// Route an already validated order to the algorithm for its kind
    pub fn execute(
        &self,
        order: Order,
        bids: &mut dyn BookSide,
        asks: &mut dyn BookSide,
        trades: &mut TradeLog,
        now: Timestamp,
    ) -> Execution {
        match order.kind {
            OrderKind::LimitBuy => self.match_limit(order, asks, bids, trades, now),
            OrderKind::LimitSell => self.match_limit(order, bids, asks, trades, now),
            OrderKind::MarketBuy => self.match_market(order, asks, trades, now),
            OrderKind::MarketSell => self.match_market(order, bids, trades, now),
        }
    }

    /// Cross up to the limit price, then rest whatever is left on `own`
    fn match_limit(
        &self,
        mut order: Order,
        opposite: &mut dyn BookSide,
        own: &mut dyn BookSide,
        trades: &mut TradeLog,
        now: Timestamp,
    ) -> Execution {
        let limit = Some(order.price);
        let executed = self.sweep(&mut order, opposite, limit, trades, now);
        let order_id = order.id.clone();

        let remainder = if order.is_filled() {
            Remainder::Filled
        } else {
            debug!(
                "Resting {} {} @ {} ({} open)",
                order.kind, order.id, order.price, order.quantity
            );
            let open = order.quantity;
            own.insert(order);
            Remainder::Rested(open)
        };

        Execution {
            order_id,
            trades: executed,
            remainder,
        }
    }

    /// Take whatever the opposite side offers; never rests
    fn match_market(
        &self,
        mut order: Order,
        opposite: &mut dyn BookSide,
        trades: &mut TradeLog,
        now: Timestamp,
    ) -> Execution {
        let executed = self.sweep(&mut order, opposite, None, trades, now);

        let remainder = if order.is_filled() {
            Remainder::Filled
        } else {
            debug!(
                "Discarding {} unfilled on {} {}",
                order.quantity, order.kind, order.id
            );
            Remainder::Discarded(order.quantity)
        };

        Execution {
            order_id: order.id,
            trades: executed,
            remainder,
        }
    }

    /// Walk the opposite side best-first and record one trade per fill
    fn sweep(
        &self,
        taker: &mut Order,
        opposite: &mut dyn BookSide,
        limit: Option<Price>,
        trades: &mut TradeLog,
        now: Timestamp,
    ) -> Vec<Trade> {
        let fills = opposite.take(&mut taker.quantity, limit);

        fills
            .into_iter()
            .filter(|fill| fill.quantity > Decimal::ZERO)
            .map(|fill| {
                let (buy_id, sell_id) = match taker.side() {
                    Side::Buy => (taker.id.clone(), fill.maker_order_id),
                    Side::Sell => (fill.maker_order_id, taker.id.clone()),
                };
                debug!(
                    "Trade buy={} sell={} {} @ {}",
                    buy_id, sell_id, fill.quantity, fill.price
                );
                trades.record_trade(buy_id, sell_id, fill.price, fill.quantity, now)
            })
            .collect()
    }
}
