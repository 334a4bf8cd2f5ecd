//! Synthetic Price Paths
//!
//! Seeded geometric random walk of daily closes, standing in for downloaded
//! market data.

use agora_core::{MarketData, Ticker};
use agora_ports::ConfigError;
use rand::prelude::*;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

/// Pre-defined market regimes for price generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Normal market conditions
    #[default]
    Normal,
    /// High volatility, no drift
    Volatile,
    /// Steady upward drift
    Trending,
    /// Negative drift, extreme volatility
    Crisis,
}

impl Scenario {
    /// Daily (drift, volatility) of log returns
    fn parameters(&self) -> (f64, f64) {
        match self {
            Scenario::Normal => (0.0003, 0.015),
            Scenario::Volatile => (0.0, 0.04),
            Scenario::Trending => (0.002, 0.012),
            Scenario::Crisis => (-0.004, 0.08),
        }
    }
}

/// Configuration for the price path generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricePathConfig {
    /// Starting close for every ticker
    pub initial_price: f64,
    /// Number of trading days to generate
    pub days: usize,
    /// Regime driving drift and volatility
    pub scenario: Scenario,
    /// Random seed (for reproducibility)
    pub seed: Option<u64>,
}

impl Default for PricePathConfig {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            days: 252,
            scenario: Scenario::Normal,
            seed: None,
        }
    }
}

impl PricePathConfig {
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates random-walk close prices for a list of tickers
pub struct PricePathGenerator {
    config: PricePathConfig,
    rng: StdRng,
}

impl PricePathGenerator {
    pub fn new(config: PricePathConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &PricePathConfig {
        &self.config
    }

    /// Generate `config.days` rows of closes for `tickers`
    pub fn generate(&mut self, tickers: &[Ticker]) -> Result<MarketData, ConfigError> {
        if tickers.is_empty() {
            return Err(ConfigError::NoTickers);
        }
        if self.config.days == 0 {
            return Err(ConfigError::EmptyMarketData);
        }
        if !(self.config.initial_price.is_finite() && self.config.initial_price > 0.0) {
            return Err(ConfigError::InvalidMarketData(format!(
                "initial price {}",
                self.config.initial_price
            )));
        }

        let (drift, volatility) = self.config.scenario.parameters();
        let normal = Normal::new(drift, volatility)
            .map_err(|e| ConfigError::InvalidMarketData(e.to_string()))?;

        let mut current = vec![self.config.initial_price; tickers.len()];
        let mut rows = Vec::with_capacity(self.config.days);
        rows.push(current.clone());

        for _ in 1..self.config.days {
            for price in current.iter_mut() {
                let log_return = normal.sample(&mut self.rng);
                *price *= log_return.exp();
            }
            rows.push(current.clone());
        }

        MarketData::new(tickers.to_vec(), rows).map_err(ConfigError::InvalidMarketData)
    }
}
