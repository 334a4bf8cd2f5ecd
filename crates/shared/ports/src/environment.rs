use agora_core::{MarketData, Observation, StepOutcome, Ticker};

use crate::error::EnvironmentResult;

/// Port for a step-based market simulation
///
/// The simulation core treats observations and actions as opaque: it only
/// relays the action vector in and the (observation, reward, done, info)
/// four-tuple out.
pub trait MarketEnvironment: Send {
    /// Advance the environment by one transition
    fn step(&mut self, actions: &[i64]) -> EnvironmentResult<StepOutcome>;

    /// Restore the environment to its initial state
    ///
    /// Returns the initial observation.
    fn reset(&mut self) -> EnvironmentResult<Observation>;

    /// Observation as of the last step or reset
    fn observation(&self) -> Observation;

    /// Environment name (for logging)
    fn name(&self) -> &str {
        "MarketEnvironment"
    }
}

/// Parameters a world passes when building its environment
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSpec {
    pub tickers: Vec<Ticker>,
    pub initial_capital: f64,
}

/// Port for constructing a market environment from external market data
pub trait EnvironmentBuilder {
    fn build(
        &self,
        data: &MarketData,
        spec: &EnvironmentSpec,
    ) -> EnvironmentResult<Box<dyn MarketEnvironment>>;
}
