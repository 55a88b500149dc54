//! Minibook Ports
//!
//! Port definitions (traits) for the minibook matching engine.
//! These define the boundaries between the matching logic and the
//! storage/time infrastructure it runs on.

mod book_side;
mod clock;
mod error;

pub use book_side::{BookSide, Fill};
pub use clock::Clock;
pub use error::{ValidationError, ValidationResult};
