use agora_core::{NewsItem, StepSnapshot};

/// Receives simulation events
///
/// Injected into a world at construction in place of component-level
/// logger configuration. All methods default to no-ops.
pub trait SimulationObserver: Send {
    fn on_news_refresh(&mut self, _items: &[NewsItem]) {}

    fn on_step(&mut self, _snapshot: &StepSnapshot) {}

    /// A step was requested after the step bound was reached
    fn on_terminal(&mut self, _step: u64) {}

    fn on_reset(&mut self) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SimulationObserver for NullObserver {}
