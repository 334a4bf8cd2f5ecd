//! Observers
//!
//! [`LogObserver`] writes simulation events through the `log` facade under a
//! caller-chosen target; [`RecordingObserver`] keeps them for inspection.

use agora_core::{NewsItem, StepSnapshot};
use agora_ports::SimulationObserver;
use parking_lot::Mutex;
use std::sync::Arc;

/// Logs every simulation event
#[derive(Debug, Clone)]
pub struct LogObserver {
    target: String,
}

impl LogObserver {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("agora::world")
    }
}

impl SimulationObserver for LogObserver {
    fn on_news_refresh(&mut self, items: &[NewsItem]) {
        log::info!(target: &self.target, "Fetched {} news items", items.len());
        for item in items {
            log::debug!(
                target: &self.target,
                "[{}] {} ({})",
                item.sentiment,
                item.headline,
                item.source
            );
        }
    }

    fn on_step(&mut self, snapshot: &StepSnapshot) {
        log::info!(
            target: &self.target,
            "Step {} completed: reward={:.6} done={} trades={}",
            snapshot.step + 1,
            snapshot.reward,
            snapshot.done,
            snapshot.trades()
        );
        for entry in &snapshot.decisions {
            log::debug!(target: &self.target, "  {} -> {:?}", entry.agent, entry.decision);
        }
    }

    fn on_terminal(&mut self, step: u64) {
        log::info!(target: &self.target, "Reached max steps ({}). Simulation complete.", step);
    }

    fn on_reset(&mut self) {
        log::info!(target: &self.target, "World reset to initial state");
    }
}

/// Event kinds captured by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    /// Number of items in the refreshed cache
    NewsRefresh(usize),
    Step(u64),
    Terminal(u64),
    Reset,
}

/// Records events into a list shared with the caller
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that stays valid after the observer is moved into a world
    pub fn events(&self) -> Arc<Mutex<Vec<ObservedEvent>>> {
        Arc::clone(&self.events)
    }
}

impl SimulationObserver for RecordingObserver {
    fn on_news_refresh(&mut self, items: &[NewsItem]) {
        self.events.lock().push(ObservedEvent::NewsRefresh(items.len()));
    }

    fn on_step(&mut self, snapshot: &StepSnapshot) {
        self.events.lock().push(ObservedEvent::Step(snapshot.step));
    }

    fn on_terminal(&mut self, step: u64) {
        self.events.lock().push(ObservedEvent::Terminal(step));
    }

    fn on_reset(&mut self) {
        self.events.lock().push(ObservedEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_handle_survives_move() {
        let observer = RecordingObserver::new();
        let events = observer.events();

        let mut boxed: Box<dyn SimulationObserver> = Box::new(observer);
        boxed.on_reset();
        boxed.on_terminal(5);

        assert_eq!(
            *events.lock(),
            vec![ObservedEvent::Reset, ObservedEvent::Terminal(5)]
        );
    }

    #[test]
    fn test_log_observer_target() {
        let _ = env_logger::try_init();
        let mut observer = LogObserver::new("agora::test");
        observer.on_terminal(1);

        assert_eq!(observer.target(), "agora::test");
        assert_eq!(LogObserver::default().target(), "agora::world");
    }
}
