use minibook_core::{Order, OrderId, Price, Quantity, Side};

/// One execution against a resting order, before it becomes a trade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub maker_order_id: OrderId,
    /// The resting order's price
    pub price: Price,
    pub quantity: Quantity,
}

/// Port for one side of the book (all bids or all asks)
///
/// Implementations differ only in cost:
/// - linear scan over an unordered vector
/// - indexed priority queue
///
/// Both must rank orders by `Side::priority`, falling back to arrival
/// order when price and timestamp are equal, and must never hold an order
/// whose quantity has reached zero.
pub trait BookSide: Send + Sync {
    /// Which side of the book this collection holds
    fn side(&self) -> Side;

    /// Rest an order on this side
    fn insert(&mut self, order: Order);

    /// Remove an order by id, returning it if present
    fn remove(&mut self, order_id: &str) -> Option<Order>;

    /// Look up a resting order by id
    fn get(&self, order_id: &str) -> Option<&Order>;

    /// The order with the best priority, recomputed on every call
    fn best(&self) -> Option<&Order>;

    /// Execute against resting orders best-first
    ///
    /// Fills `min(remaining, resting)` per order, decrementing both and
    /// dropping exhausted resting orders. Stops when `remaining` reaches
    /// zero, the side is exhausted, or the next resting price no longer
    /// crosses `limit` (market orders pass `None`).
    fn take(&mut self, remaining: &mut Quantity, limit: Option<Price>) -> Vec<Fill>;

    /// Owned copies of all resting orders, best-first
    fn orders(&self) -> Vec<Order>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Get the name of the storage strategy
    fn name(&self) -> &str;
}
