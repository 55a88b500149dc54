//! Minibook Core Domain
//!
//! Pure domain types for the minibook matching engine.
//! This crate contains no I/O and no book state; it only describes orders,
//! trades and the views the engine hands back to callers.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    BookSnapshot, Order, OrderKind, ParseOrderKindError, Side, TopOfBook, Trade, TradeId,
};
pub use values::{OrderId, Price, Quantity, Timestamp};
