use agora_core::Timestamp;
use agora_ports::Clock;
use chrono::Utc;
use std::sync::Arc;

/// Wall-clock time, used for real runs
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Handle ready to hand to a world or a news feed
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(SystemClock)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_forward() {
        let clock = SystemClock::shared();
        let start = clock.now();

        assert!(clock.elapsed_since(start) >= chrono::Duration::zero());
        assert_eq!(clock.name(), "SystemClock");
    }
}
