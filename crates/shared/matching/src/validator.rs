use chrono::{TimeZone, Utc};
use minibook_core::{Order, OrderKind, Price, Quantity, Timestamp};
use minibook_ports::{ValidationError, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loose inbound order payload, as a transport layer would receive it
///
/// Unlike [`Order`], nothing here is trusted: the type is free text and
/// price/timestamp may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub quantity: Quantity,
    /// Epoch milliseconds
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Rejects malformed orders before they touch book state
pub struct OrderValidator;

impl OrderValidator {
    /// Validate a fully typed order
    pub fn validate(order: &Order) -> ValidationResult<()> {
        if order.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if order.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity(order.quantity));
        }

        // Market orders ignore the price entirely
        if order.is_limit() && order.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(order.price));
        }

        Ok(())
    }

    /// Turn a raw request into a validated order
    ///
    /// `now` stamps requests that arrive without a timestamp.
    pub fn parse(request: OrderRequest, now: Timestamp) -> ValidationResult<Order> {
        let kind: OrderKind = request.kind.trim().parse()?;

        let timestamp = match request.timestamp {
            Some(millis) => Utc.timestamp_millis_opt(millis).single().unwrap_or(now),
            None => now,
        };

        let order = Order::new_with_time(
            request.id,
            kind,
            request.price.unwrap_or(Decimal::ZERO),
            request.quantity,
            timestamp,
        );

        Self::validate(&order)?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn now() -> Timestamp {
        Utc.timestamp_millis_opt(1_000).unwrap()
    }

    #[test]
    fn test_valid_limit_order() {
        let order = Order::limit_buy("b1", dec!(100), dec!(5));
        assert!(OrderValidator::validate(&order).is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let order = Order::limit_buy("", dec!(100), dec!(5));
        assert_eq!(
            OrderValidator::validate(&order),
            Err(ValidationError::EmptyId)
        );
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let zero = Order::limit_sell("s1", dec!(100), dec!(0));
        let negative = Order::market_buy("mb1", dec!(-1));

        assert_eq!(
            OrderValidator::validate(&zero),
            Err(ValidationError::NonPositiveQuantity(dec!(0)))
        );
        assert_eq!(
            OrderValidator::validate(&negative),
            Err(ValidationError::NonPositiveQuantity(dec!(-1)))
        );
    }

    #[test]
    fn test_limit_price_must_be_positive() {
        let order = Order::limit_sell("s1", dec!(0), dec!(1));
        assert_eq!(
            OrderValidator::validate(&order),
            Err(ValidationError::NonPositivePrice(dec!(0)))
        );
    }

    #[test]
    fn test_market_order_exempt_from_price_check() {
        let order = Order::market_sell("ms1", dec!(2));
        assert!(OrderValidator::validate(&order).is_ok());
    }

    #[test]
    fn test_parse_request() {
        let request = OrderRequest {
            id: "b1".to_string(),
            kind: "buy".to_string(),
            price: Some(dec!(100)),
            quantity: dec!(5),
            timestamp: Some(1_748_339_715_477),
        };

        let order = OrderValidator::parse(request, now()).unwrap();
        assert_eq!(order.kind, OrderKind::LimitBuy);
        assert_eq!(order.timestamp.timestamp_millis(), 1_748_339_715_477);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let request = OrderRequest {
            id: "x1".to_string(),
            kind: "stop_loss".to_string(),
            price: Some(dec!(100)),
            quantity: dec!(1),
            timestamp: None,
        };

        assert_eq!(
            OrderValidator::parse(request, now()),
            Err(ValidationError::UnknownKind("stop_loss".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_fields() {
        let request: OrderRequest = serde_json::from_str(r#"{"type":"market_buy"}"#).unwrap();
        assert_eq!(
            OrderValidator::parse(request, now()),
            Err(ValidationError::EmptyId)
        );

        let request: OrderRequest =
            serde_json::from_str(r#"{"id":"mb1","type":"market_buy","quantity":3}"#).unwrap();
        let order = OrderValidator::parse(request, now()).unwrap();
        assert_eq!(order.timestamp, now());
        assert_eq!(order.price, Decimal::ZERO);
    }

    #[test]
    fn test_parse_limit_without_price() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"id":"s1","type":"sell","quantity":3}"#).unwrap();
        assert_eq!(
            OrderValidator::parse(request, now()),
            Err(ValidationError::NonPositivePrice(Decimal::ZERO))
        );
    }
}
