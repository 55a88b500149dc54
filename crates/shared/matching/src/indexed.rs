use std::cmp::Reverse;
use std::collections::HashMap;

use minibook_core::{Order, OrderId, Price, Quantity, Side, Timestamp};
use minibook_ports::{BookSide, Fill};
use priority_queue::PriorityQueue;
use rust_decimal::Decimal;

/// Heap rank: signed price, then earlier timestamp, then earlier arrival.
/// The queue pops the greatest rank first.
type Rank = (Decimal, Reverse<Timestamp>, Reverse<u64>);

/// Priority-queue backed side with an id index
///
/// Best order, insert and cancel are all O(log n). Asks store the negated
/// price so that the max-heap surfaces the lowest ask.
#[derive(Debug, Clone)]
pub struct IndexedBookSide {
    side: Side,
    queue: PriorityQueue<OrderId, Rank>,
    orders: HashMap<OrderId, Order>,
    arrivals: u64,
}

impl IndexedBookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            queue: PriorityQueue::new(),
            orders: HashMap::new(),
            arrivals: 0,
        }
    }

    fn rank(&mut self, order: &Order) -> Rank {
        self.arrivals += 1;
        let price_key = match self.side {
            Side::Buy => order.price,
            Side::Sell => -order.price,
        };
        (price_key, Reverse(order.timestamp), Reverse(self.arrivals))
    }
}

impl BookSide for IndexedBookSide {
    fn side(&self) -> Side {
        self.side
    }

    fn insert(&mut self, order: Order) {
        // A re-used id replaces the previous entry and takes a fresh arrival slot
        self.remove(&order.id);
        let rank = self.rank(&order);
        self.queue.push(order.id.clone(), rank);
        self.orders.insert(order.id.clone(), order);
    }

    fn remove(&mut self, order_id: &str) -> Option<Order> {
        self.queue.remove(order_id);
        self.orders.remove(order_id)
    }

    fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    fn best(&self) -> Option<&Order> {
        let (id, _) = self.queue.peek()?;
        self.orders.get(id)
    }

    fn take(&mut self, remaining: &mut Quantity, limit: Option<Price>) -> Vec<Fill> {
        let mut fills = Vec::new();

        while *remaining > Decimal::ZERO {
            let Some((id, _)) = self.queue.peek() else {
                break;
            };
            let id = id.clone();

            let Some(resting) = self.orders.get_mut(&id) else {
                // Stale heap entry with no backing order
                self.queue.pop();
                continue;
            };

            if let Some(limit) = limit {
                if !self.side.crosses(resting.price, limit) {
                    break;
                }
            }

            let quantity = (*remaining).min(resting.quantity);
            resting.quantity -= quantity;
            *remaining -= quantity;

            fills.push(Fill {
                maker_order_id: id.clone(),
                price: resting.price,
                quantity,
            });

            if resting.is_filled() {
                self.queue.pop();
                self.orders.remove(&id);
            }
        }

        fills
    }

    fn orders(&self) -> Vec<Order> {
        let mut ranked: Vec<(&OrderId, &Rank)> = self.queue.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .filter_map(|(id, _)| self.orders.get(id).cloned())
            .collect()
    }

    fn len(&self) -> usize {
        self.orders.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.orders.clear();
    }

    fn name(&self) -> &str {
        "Indexed"
    }
}
