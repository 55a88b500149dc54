//! Minibook Matching
//!
//! In-memory limit order book with price-time priority matching.
//!
//! - [`OrderBook`]: owns both sides and the trade log; the entry point
//! - [`PriceTimeMatcher`]: the four matching algorithms (limit/market × buy/sell)
//! - [`LinearBookSide`] / [`IndexedBookSide`]: interchangeable side storage
//! - [`TradeLog`]: append-only trade record
//! - [`SharedOrderBook`]: lock-guarded handle for concurrent callers

mod config;
mod indexed;
mod linear;
mod order_book;
mod price_time;
mod shared;
mod trade_log;
mod validator;

pub use config::{BookSideKind, ConfigError, EngineConfig};
pub use indexed::IndexedBookSide;
pub use linear::LinearBookSide;
pub use order_book::OrderBook;
pub use price_time::{Execution, PriceTimeMatcher, Remainder};
pub use shared::SharedOrderBook;
pub use trade_log::TradeLog;
pub use validator::{OrderRequest, OrderValidator};

// Re-export the ports for convenience
pub use minibook_ports::{BookSide, Clock, Fill, ValidationError, ValidationResult};

use minibook_core::Side;

/// Factory function to create side storage by kind
pub fn create_book_side(kind: BookSideKind, side: Side) -> Box<dyn BookSide> {
    match kind {
        BookSideKind::Linear => Box::new(LinearBookSide::new(side)),
        BookSideKind::Indexed => Box::new(IndexedBookSide::new(side)),
    }
}
