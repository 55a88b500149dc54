use std::path::Path;

use log::{info, warn};
use minibook_core::{BookSnapshot, OrderId, TopOfBook, Trade};
use minibook_matching::{ConfigError, EngineConfig, OrderBook, OrderRequest, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid order stream: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed order in the engine config failed validation
    #[error("Invalid seed order: {0}")]
    Seed(#[from] ValidationError),
}

/// A request the book refused, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub order_id: OrderId,
    pub reason: String,
}

/// Outcome of replaying an order stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
    /// Trades produced by the replayed requests, excluding seed fills
    pub trades: Vec<Trade>,
    pub top_of_book: TopOfBook,
    pub snapshot: BookSnapshot,
}

/// Build the book from an optional config file
pub fn load_book(config: Option<&Path>) -> Result<OrderBook, RunnerError> {
    let config = match config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };
    Ok(OrderBook::from_config(&config)?)
}

/// Read a JSON array of order requests
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<OrderRequest>, RunnerError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Feed requests through the book in order
///
/// Rejected requests are collected in the report; they never stop the replay.
pub fn replay(book: &mut OrderBook, requests: Vec<OrderRequest>) -> ReplayReport {
    let mut accepted = 0;
    let mut rejected = Vec::new();
    let mut trades = Vec::new();

    for request in requests {
        let order_id = request.id.clone();
        match book.submit_request(request) {
            Ok(execution) => {
                accepted += 1;
                trades.extend(execution.trades);
            }
            Err(err) => rejected.push(Rejection {
                order_id,
                reason: err.to_string(),
            }),
        }
    }

    if !rejected.is_empty() {
        warn!("{} of {} requests rejected", rejected.len(), accepted + rejected.len());
    }
    info!("Replay done: {} accepted, {} trades", accepted, trades.len());

    ReplayReport {
        accepted,
        rejected,
        trades,
        top_of_book: book.top_of_book(),
        snapshot: book.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(id: &str, kind: &str, price: Option<i64>, quantity: i64) -> OrderRequest {
        OrderRequest {
            id: id.to_string(),
            kind: kind.to_string(),
            price: price.map(minibook_core::Price::from),
            quantity: quantity.into(),
            timestamp: None,
        }
    }

    #[test]
    fn test_replay_counts_and_trades() {
        let mut book = OrderBook::new();
        let report = replay(
            &mut book,
            vec![
                request("s1", "sell", Some(95), 3),
                request("b1", "buy", Some(100), 5),
            ],
        );

        assert_eq!(report.accepted, 2);
        assert!(report.rejected.is_empty());
        assert_eq!(report.trades.len(), 1);
        assert_eq!(report.trades[0].price, dec!(95));
        assert_eq!(
            report.top_of_book.best_bid.map(|o| o.quantity),
            Some(dec!(2))
        );
    }

    #[test]
    fn test_rejections_do_not_stop_replay() {
        let mut book = OrderBook::new();
        let report = replay(
            &mut book,
            vec![
                request("bad", "iceberg", Some(1), 1),
                request("", "buy", Some(1), 1),
                request("b1", "buy", Some(100), 1),
            ],
        );

        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].order_id, "bad");
        assert_eq!(report.rejected[0].reason, "Unrecognized order type: iceberg");
        assert_eq!(report.snapshot.bids.len(), 1);
    }

    #[test]
    fn test_missing_orders_file() {
        let err = load_orders("/no/such/orders.json").unwrap_err();
        assert!(matches!(err, RunnerError::Io { .. }));
    }
}
