use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Side;

/// The four order kinds the engine accepts
///
/// Wire names follow the REST payloads: limit orders are plain `buy` /
/// `sell`, market orders carry a `market_` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Buy at the given price or better; unfilled remainder rests
    #[serde(rename = "buy", alias = "limit_buy")]
    LimitBuy,
    /// Sell at the given price or better; unfilled remainder rests
    #[serde(rename = "sell", alias = "limit_sell")]
    LimitSell,
    /// Buy against whatever asks rest; unfilled remainder is dropped
    #[serde(rename = "market_buy")]
    MarketBuy,
    /// Sell against whatever bids rest; unfilled remainder is dropped
    #[serde(rename = "market_sell")]
    MarketSell,
}

impl OrderKind {
    pub fn side(&self) -> Side {
        match self {
            OrderKind::LimitBuy | OrderKind::MarketBuy => Side::Buy,
            OrderKind::LimitSell | OrderKind::MarketSell => Side::Sell,
        }
    }

    pub fn is_market(&self) -> bool {
        matches!(self, OrderKind::MarketBuy | OrderKind::MarketSell)
    }

    pub fn is_limit(&self) -> bool {
        !self.is_market()
    }

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::LimitBuy => "buy",
            OrderKind::LimitSell => "sell",
            OrderKind::MarketBuy => "market_buy",
            OrderKind::MarketSell => "market_sell",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized order type: {0}")]
pub struct ParseOrderKindError(pub String);

impl FromStr for OrderKind {
    type Err = ParseOrderKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "buy" | "limit_buy" => Ok(OrderKind::LimitBuy),
            "sell" | "limit_sell" => Ok(OrderKind::LimitSell),
            "market_buy" => Ok(OrderKind::MarketBuy),
            "market_sell" => Ok(OrderKind::MarketSell),
            _ => Err(ParseOrderKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_wire_and_long_names() {
        assert_eq!("buy".parse::<OrderKind>(), Ok(OrderKind::LimitBuy));
        assert_eq!("limit-sell".parse::<OrderKind>(), Ok(OrderKind::LimitSell));
        assert_eq!("MARKET_BUY".parse::<OrderKind>(), Ok(OrderKind::MarketBuy));
        assert_eq!("market-sell".parse::<OrderKind>(), Ok(OrderKind::MarketSell));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "stop".parse::<OrderKind>().unwrap_err();
        assert_eq!(err, ParseOrderKindError("stop".to_string()));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OrderKind::MarketSell).unwrap();
        assert_eq!(json, "\"market_sell\"");

        let kind: OrderKind = serde_json::from_str("\"limit_buy\"").unwrap();
        assert_eq!(kind, OrderKind::LimitBuy);
        assert!(serde_json::from_str::<OrderKind>("\"iceberg\"").is_err());
    }

    #[test]
    fn test_side_mapping() {
        assert_eq!(OrderKind::LimitBuy.side(), Side::Buy);
        assert_eq!(OrderKind::MarketBuy.side(), Side::Buy);
        assert_eq!(OrderKind::LimitSell.side(), Side::Sell);
        assert_eq!(OrderKind::MarketSell.side(), Side::Sell);
        assert!(OrderKind::MarketSell.is_market());
        assert!(OrderKind::LimitSell.is_limit());
    }
}
