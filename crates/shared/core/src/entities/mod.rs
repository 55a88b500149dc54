mod order;
mod order_kind;
mod side;
mod snapshot;
mod trade;

pub use order::Order;
pub use order_kind::{OrderKind, ParseOrderKindError};
pub use side::Side;
pub use snapshot::{BookSnapshot, TopOfBook};
pub use trade::{Trade, TradeId};
