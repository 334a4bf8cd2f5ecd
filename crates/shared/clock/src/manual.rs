use agora_core::Timestamp;
use agora_ports::Clock;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Frozen clock that only advances when told to
///
/// Shared as `Arc<ManualClock>`: the simulation holds one handle as its
/// `Clock` while the test driving it holds another and moves time forward.
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a new manual clock
    ///
    /// # Arguments
    /// * `initial_time` - Optional starting time. If None, uses current wall time.
    pub fn new(initial_time: Option<Timestamp>) -> Arc<Self> {
        Arc::new(Self {
            current_time: RwLock::new(initial_time.unwrap_or_else(Utc::now)),
        })
    }

    /// Advance the time by a specified duration
    pub fn advance(&self, duration: Duration) {
        *self.current_time.write() += duration;
    }

    /// Explicitly set the time
    ///
    /// Warning: setting an earlier time makes elapsed-time checks negative.
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_is_frozen() {
        let clock = ManualClock::new(None);

        let time1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now();

        assert_eq!(time1, time2);
    }

    #[test]
    fn test_advance() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        let clock = ManualClock::new(Some(start));

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - start, Duration::seconds(5));
    }

    #[test]
    fn test_shared_handle_sees_updates() {
        let clock = ManualClock::new(None);
        let as_port: Arc<dyn Clock> = clock.clone();

        let before = as_port.now();
        clock.advance(Duration::minutes(1));

        assert_eq!(as_port.now() - before, Duration::minutes(1));
        assert_eq!(as_port.name(), "ManualClock");
    }
}
