//! Minibook Clock Infrastructure
//!
//! Time sources for the engine's trade timestamps:
//!
//! - [`SystemClock`]: wall-clock time, the production default
//! - [`ManualClock`]: frozen time that only moves when told to, for
//!   deterministic tests and replays
//!
//! ```ignore
//! use minibook_clock::{ManualClock, Clock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_at_millis(1_748_339_715_477);
//! let t0 = clock.now();
//! clock.advance(Duration::milliseconds(5));
//! assert_eq!(clock.now() - t0, Duration::milliseconds(5));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use minibook_ports::Clock;
