use std::sync::Arc;

use minibook_core::{BookSnapshot, Order, TopOfBook, Trade};
use minibook_ports::ValidationResult;
use parking_lot::RwLock;

use crate::order_book::OrderBook;
use crate::price_time::Execution;

/// Thread-safe handle to a single order book
///
/// Cloning the handle shares the same book. Every write holds the lock
/// for the whole validate-match-record sequence; reads hand back owned
/// copies so no reference outlives the lock.
#[derive(Clone, Debug)]
pub struct SharedOrderBook {
    book: Arc<RwLock<OrderBook>>,
}

impl SharedOrderBook {
    pub fn new(book: OrderBook) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
        }
    }

    pub fn add_order(&self, order: Order) -> ValidationResult<Vec<Trade>> {
        self.book.write().add_order(order)
    }

    pub fn submit(&self, order: Order) -> ValidationResult<Execution> {
        self.book.write().submit(order)
    }

    pub fn cancel_order(&self, order_id: &str) -> bool {
        self.book.write().cancel_order(order_id)
    }

    pub fn best_bid(&self) -> Option<Order> {
        self.book.read().best_bid().cloned()
    }

    pub fn best_ask(&self) -> Option<Order> {
        self.book.read().best_ask().cloned()
    }

    pub fn top_of_book(&self) -> TopOfBook {
        self.book.read().top_of_book()
    }

    pub fn get(&self) -> BookSnapshot {
        self.book.read().get()
    }

    pub fn trades(&self) -> Vec<Trade> {
        self.book.read().trades().to_vec()
    }

    pub fn clear(&self) {
        self.book.write().clear();
    }

    /// Run a closure with exclusive access to the book
    pub fn with_book<R>(&self, f: impl FnOnce(&mut OrderBook) -> R) -> R {
        f(&mut self.book.write())
    }
}

impl Default for SharedOrderBook {
    fn default() -> Self {
        Self::new(OrderBook::new())
    }
}

impl From<OrderBook> for SharedOrderBook {
    fn from(book: OrderBook) -> Self {
        Self::new(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookSideKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_clones_share_state() {
        let book = SharedOrderBook::default();
        let other = book.clone();

        book.add_order(Order::limit_sell("s1", dec!(100), dec!(5)))
            .unwrap();

        assert_eq!(other.best_ask().map(|o| o.id), Some("s1".to_string()));
        assert!(other.cancel_order("s1"));
        assert!(book.best_ask().is_none());
    }

    #[test]
    fn test_concurrent_writers_conserve_quantity() {
        let book = SharedOrderBook::new(OrderBook::with_storage(BookSideKind::Indexed));
        book.add_order(Order::limit_sell("s1", dec!(100), dec!(1000)))
            .unwrap();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let book = book.clone();
                scope.spawn(move || {
                    for i in 0..25 {
                        let id = format!("mb-{worker}-{i}");
                        book.add_order(Order::market_buy(id, dec!(2))).unwrap();
                    }
                });
            }
        });

        let trades = book.trades();
        let filled: rust_decimal::Decimal = trades.iter().map(|t| t.quantity).sum();
        assert_eq!(trades.len(), 200);
        assert_eq!(filled, dec!(400));
        assert_eq!(book.best_ask().map(|o| o.quantity), Some(dec!(600)));
    }

    #[test]
    fn test_with_book() {
        let book = SharedOrderBook::default();
        let len = book.with_book(|b| {
            b.add_order(Order::limit_buy("b1", dec!(1), dec!(1))).unwrap();
            b.len()
        });
        assert_eq!(len, 1);
        book.clear();
        assert!(book.get().is_empty());
    }
}
