use std::sync::Arc;

use log::{info, warn};
use minibook_clock::SystemClock;
use minibook_core::{BookSnapshot, Order, Price, Side, TopOfBook, Trade};
use minibook_ports::{BookSide, Clock, ValidationError, ValidationResult};

use crate::config::{BookSideKind, EngineConfig};
use crate::create_book_side;
use crate::price_time::{Execution, PriceTimeMatcher};
use crate::trade_log::TradeLog;
use crate::validator::{OrderRequest, OrderValidator};

/// In-memory limit order book with price-time priority matching
///
/// Owns the bid side, the ask side and the trade log. All mutation goes
/// through `&mut self`; wrap it in a [`crate::SharedOrderBook`] to share it
/// between threads.
pub struct OrderBook {
    bids: Box<dyn BookSide>,
    asks: Box<dyn BookSide>,
    trades: TradeLog,
    matcher: PriceTimeMatcher,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBook")
            .field("storage", &self.bids.name())
            .field("bids_count", &self.bids.len())
            .field("asks_count", &self.asks.len())
            .field("trade_count", &self.trades.len())
            .field("matcher", &self.matcher.name())
            .field("clock", &self.clock.name())
            .finish()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create an empty book with linear storage and the system clock
    pub fn new() -> Self {
        Self::with_storage(BookSideKind::Linear)
    }

    /// Create an empty book with a specific side storage
    pub fn with_storage(kind: BookSideKind) -> Self {
        Self::with_clock(kind, Arc::new(SystemClock::new()))
    }

    /// Create an empty book stamping trades from `clock`
    pub fn with_clock(kind: BookSideKind, clock: Arc<dyn Clock>) -> Self {
        Self {
            bids: create_book_side(kind, Side::Buy),
            asks: create_book_side(kind, Side::Sell),
            trades: TradeLog::new(),
            matcher: PriceTimeMatcher::new(),
            clock,
        }
    }

    /// Build a book from configuration and submit its seed orders
    pub fn from_config(config: &EngineConfig) -> ValidationResult<Self> {
        Self::from_config_with_clock(config, Arc::new(SystemClock::new()))
    }

    pub fn from_config_with_clock(
        config: &EngineConfig,
        clock: Arc<dyn Clock>,
    ) -> ValidationResult<Self> {
        let mut book = Self::with_clock(config.book_side, clock);
        for order in &config.seed_orders {
            book.add_order(order.clone())?;
        }
        info!(
            "Order book '{}' ready ({} storage, {} seed orders)",
            config.name,
            config.book_side,
            config.seed_orders.len()
        );
        Ok(book)
    }

    /// Validate and match an order, returning the trades it produced
    pub fn add_order(&mut self, order: Order) -> ValidationResult<Vec<Trade>> {
        self.submit(order).map(|execution| execution.trades)
    }

    /// Validate and match an order, returning the full execution report
    ///
    /// Nothing in the book changes when validation fails.
    pub fn submit(&mut self, order: Order) -> ValidationResult<Execution> {
        if let Err(err) = self.check(&order) {
            warn!("Rejected order {:?}: {}", order.id, err);
            return Err(err);
        }

        let now = self.clock.now();
        Ok(self.matcher.execute(
            order,
            self.bids.as_mut(),
            self.asks.as_mut(),
            &mut self.trades,
            now,
        ))
    }

    /// Parse a raw request, stamping it from the book clock if it has no
    /// timestamp, then submit it
    pub fn submit_request(&mut self, request: OrderRequest) -> ValidationResult<Execution> {
        let order = match OrderValidator::parse(request, self.clock.now()) {
            Ok(order) => order,
            Err(err) => {
                warn!("Rejected request: {}", err);
                return Err(err);
            }
        };
        self.submit(order)
    }

    fn check(&self, order: &Order) -> ValidationResult<()> {
        OrderValidator::validate(order)?;
        if self.order(&order.id).is_some() {
            return Err(ValidationError::DuplicateOrderId(order.id.clone()));
        }
        Ok(())
    }

    /// Remove a resting order; `false` if no order with that id rests
    pub fn cancel_order(&mut self, order_id: &str) -> bool {
        self.bids
            .remove(order_id)
            .or_else(|| self.asks.remove(order_id))
            .is_some()
    }

    /// Highest-priced bid, earliest first on ties
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.best()
    }

    /// Lowest-priced ask, earliest first on ties
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.best()
    }

    pub fn top_of_book(&self) -> TopOfBook {
        TopOfBook {
            best_bid: self.best_bid().cloned(),
            best_ask: self.best_ask().cloned(),
        }
    }

    /// Price of the most recent trade
    pub fn last_price(&self) -> Option<Price> {
        self.trades.trades().last().map(|t| t.price)
    }

    /// Look up a resting order on either side
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.bids.get(order_id).or_else(|| self.asks.get(order_id))
    }

    /// Owned copy of both sides and the trade log
    pub fn get(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.orders(),
            asks: self.asks.orders(),
            trades: self.trades.trades().to_vec(),
        }
    }

    /// Trade history, oldest first
    pub fn trades(&self) -> &[Trade] {
        self.trades.trades()
    }

    /// Number of resting orders across both sides
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Get the name of the side storage in use
    pub fn storage_name(&self) -> &str {
        self.bids.name()
    }

    /// Drop every resting order and the whole trade history
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.trades.clear();
        info!("Order book cleared");
    }
}
