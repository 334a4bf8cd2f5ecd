//! Agora Clock Infrastructure
//!
//! Time sources for the simulation:
//!
//! - [`SystemClock`]: wall-clock time for real runs
//! - [`ManualClock`]: frozen time that only moves when advanced, for
//!   deterministic tests of interval-driven behaviour (news refresh)
//!
//! ## Usage
//!
//! ```ignore
//! use agora_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(None);
//! let t0 = clock.now();
//! clock.advance(Duration::seconds(30));
//! assert_eq!(clock.now() - t0, Duration::seconds(30));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use agora_ports::Clock;
