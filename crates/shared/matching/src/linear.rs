use minibook_core::{Order, Price, Quantity, Side};
use minibook_ports::{BookSide, Fill};
use rust_decimal::Decimal;

/// Unordered vector of resting orders
///
/// Matching sorts the vector by priority (stable, so equal keys keep
/// arrival order) and walks it from the front. Queries never rely on
/// that sort having happened; `best()` scans.
#[derive(Debug, Clone)]
pub struct LinearBookSide {
    side: Side,
    orders: Vec<Order>,
}

impl LinearBookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            orders: Vec::new(),
        }
    }
}

impl BookSide for LinearBookSide {
    fn side(&self) -> Side {
        self.side
    }

    fn insert(&mut self, order: Order) {
        self.orders.push(order);
    }

    fn remove(&mut self, order_id: &str) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id == order_id)?;
        Some(self.orders.remove(pos))
    }

    fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    fn best(&self) -> Option<&Order> {
        // min_by keeps the first of several equal minima
        self.orders
            .iter()
            .min_by(|a, b| self.side.priority(a, b))
    }

    fn take(&mut self, remaining: &mut Quantity, limit: Option<Price>) -> Vec<Fill> {
        let side = self.side;
        self.orders.sort_by(|a, b| side.priority(a, b));

        let mut fills = Vec::new();
        let mut i = 0;
        while *remaining > Decimal::ZERO && i < self.orders.len() {
            let resting = &mut self.orders[i];

            if let Some(limit) = limit {
                if !side.crosses(resting.price, limit) {
                    break;
                }
            }

            let quantity = (*remaining).min(resting.quantity);
            resting.quantity -= quantity;
            *remaining -= quantity;

            fills.push(Fill {
                maker_order_id: resting.id.clone(),
                price: resting.price,
                quantity,
            });

            if resting.is_filled() {
                // The next order shifts into slot i
                self.orders.remove(i);
            } else {
                i += 1;
            }
        }

        fills
    }

    fn orders(&self) -> Vec<Order> {
        let mut orders = self.orders.clone();
        orders.sort_by(|a, b| self.side.priority(a, b));
        orders
    }

    fn len(&self) -> usize {
        self.orders.len()
    }

    fn clear(&mut self) {
        self.orders.clear();
    }

    fn name(&self) -> &str {
        "Linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use minibook_core::{OrderKind, Timestamp};
    use rust_decimal_macros::dec;

    fn t(ms: i64) -> Timestamp {
        Utc.timestamp_millis_opt(1_000).unwrap() + Duration::milliseconds(ms)
    }

    fn ask(id: &str, price: Decimal, qty: Decimal, ms: i64) -> Order {
        Order::new_with_time(id, OrderKind::LimitSell, price, qty, t(ms))
    }

    fn bid(id: &str, price: Decimal, qty: Decimal, ms: i64) -> Order {
        Order::new_with_time(id, OrderKind::LimitBuy, price, qty, t(ms))
    }

    #[test]
    fn test_best_ask_is_lowest_then_earliest() {
        let mut asks = LinearBookSide::new(Side::Sell);
        asks.insert(ask("late", dec!(100), dec!(1), 10));
        asks.insert(ask("dear", dec!(105), dec!(1), 0));
        asks.insert(ask("early", dec!(100), dec!(1), 5));

        assert_eq!(asks.best().map(|o| o.id.as_str()), Some("early"));
    }

    #[test]
    fn test_best_bid_is_highest() {
        let mut bids = LinearBookSide::new(Side::Buy);
        bids.insert(bid("1", dec!(101), dec!(5), 0));
        bids.insert(bid("2", dec!(105), dec!(3), 1));

        assert_eq!(bids.best().map(|o| o.id.as_str()), Some("2"));
    }

    #[test]
    fn test_take_walks_levels_and_removes_exhausted() {
        let mut asks = LinearBookSide::new(Side::Sell);
        asks.insert(ask("a2", dec!(101), dec!(4), 0));
        asks.insert(ask("a1", dec!(100), dec!(2), 1));

        let mut remaining = dec!(5);
        let fills = asks.take(&mut remaining, Some(dec!(101)));

        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].maker_order_id, "a1");
        assert_eq!(fills[0].price, dec!(100));
        assert_eq!(fills[0].quantity, dec!(2));
        assert_eq!(fills[1].maker_order_id, "a2");
        assert_eq!(fills[1].quantity, dec!(3));
        assert_eq!(remaining, dec!(0));

        assert_eq!(asks.len(), 1);
        assert_eq!(asks.get("a2").map(|o| o.quantity), Some(dec!(1)));
        assert!(asks.get("a1").is_none());
    }

    #[test]
    fn test_take_stops_at_limit() {
        let mut bids = LinearBookSide::new(Side::Buy);
        bids.insert(bid("b1", dec!(99), dec!(5), 0));

        let mut remaining = dec!(5);
        let fills = bids.take(&mut remaining, Some(dec!(100)));

        assert!(fills.is_empty());
        assert_eq!(remaining, dec!(5));
        assert_eq!(bids.len(), 1);
    }

    #[test]
    fn test_take_without_limit_exhausts_side() {
        let mut bids = LinearBookSide::new(Side::Buy);
        bids.insert(bid("b1", dec!(90), dec!(1), 0));
        bids.insert(bid("b2", dec!(80), dec!(1), 0));

        let mut remaining = dec!(10);
        let fills = bids.take(&mut remaining, None);

        assert_eq!(fills.len(), 2);
        assert_eq!(remaining, dec!(8));
        assert!(bids.is_empty());
    }

    #[test]
    fn test_remove_and_orders_snapshot() {
        let mut asks = LinearBookSide::new(Side::Sell);
        asks.insert(ask("a1", dec!(102), dec!(1), 0));
        asks.insert(ask("a2", dec!(101), dec!(1), 0));

        let listed: Vec<_> = asks.orders().into_iter().map(|o| o.id).collect();
        assert_eq!(listed, vec!["a2", "a1"]);

        assert_eq!(asks.remove("a1").map(|o| o.id), Some("a1".to_string()));
        assert!(asks.remove("a1").is_none());
        assert_eq!(asks.len(), 1);
    }
}
