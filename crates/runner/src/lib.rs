//! Minibook Runner
//!
//! Replays a recorded stream of order requests through an [`OrderBook`]
//! and summarises what happened. The `minibook-runner` binary is a thin
//! wrapper around [`replay`].
//!
//! [`OrderBook`]: minibook_matching::OrderBook

pub mod replay;

pub use replay::{Rejection, ReplayReport, RunnerError, load_book, load_orders, replay};
