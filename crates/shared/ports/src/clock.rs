use minibook_core::Timestamp;

/// Port for time abstraction
///
/// The engine stamps every trade with `now()`, so tests swap in a
/// manually driven clock to get deterministic execution times.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
