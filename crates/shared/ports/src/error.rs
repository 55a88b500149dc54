use minibook_core::{OrderId, ParseOrderKindError, Price, Quantity};
use thiserror::Error;

/// Reasons an order is refused before it touches the book
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Order id must not be empty")]
    EmptyId,

    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(Quantity),

    #[error("Limit price must be positive, got {0}")]
    NonPositivePrice(Price),

    #[error("Unrecognized order type: {0}")]
    UnknownKind(String),

    #[error("Order {0} is already resting in the book")]
    DuplicateOrderId(OrderId),
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

impl From<ParseOrderKindError> for ValidationError {
    fn from(err: ParseOrderKindError) -> Self {
        ValidationError::UnknownKind(err.0)
    }
}
