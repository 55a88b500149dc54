//! Engine configuration
//!
//! Loaded from JSON, e.g.:
//!
//! ```json
//! {
//!   "name": "demo",
//!   "bookSide": "indexed",
//!   "seedOrders": [
//!     { "id": "s1", "type": "sell", "price": 101, "quantity": 5, "timestamp": 0 }
//!   ]
//! }
//! ```

use std::fmt;
use std::path::Path;

use minibook_core::Order;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage strategy for each side of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSideKind {
    /// Unordered vector, sorted on each match
    #[default]
    Linear,
    /// Priority queue with an id index
    Indexed,
}

impl fmt::Display for BookSideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSideKind::Linear => f.write_str("linear"),
            BookSideKind::Indexed => f.write_str("indexed"),
        }
    }
}

/// Root configuration for an order book instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Engine name, used in logs
    #[serde(default = "default_engine_name")]
    pub name: String,

    #[serde(default)]
    pub book_side: BookSideKind,

    /// Orders submitted right after construction, e.g. initial liquidity
    #[serde(default)]
    pub seed_orders: Vec<Order>,
}

fn default_engine_name() -> String {
    "minibook".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_engine_name(),
            book_side: BookSideKind::default(),
            seed_orders: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn with_book_side(mut self, kind: BookSideKind) -> Self {
        self.book_side = kind;
        self
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
