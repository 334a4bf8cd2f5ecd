//! Runner configuration
//!
//! Loaded from JSON; every field is optional and falls back to the
//! demonstration defaults.

use agora_agents::TradingStyle;
use agora_market::{EnvConfig, PricePathConfig};
use agora_news::ScraperConfig;
use agora_ports::ConfigError;
use agora_world::WorldConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One trader persona to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderSpec {
    pub name: String,
    pub style: TradingStyle,
    pub risk_tolerance: f64,
}

impl TraderSpec {
    pub fn new(name: &str, style: impl Into<TradingStyle>, risk_tolerance: f64) -> Self {
        Self {
            name: name.to_string(),
            style: style.into(),
            risk_tolerance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Steps taken by `run` unless the world turns terminal first
    pub total_steps: u64,
    /// Pause between two steps (milliseconds)
    pub step_delay_ms: u64,
    /// Seed for agent, policy and price randomness; entropy when absent
    pub seed: Option<u64>,
    pub traders: Vec<TraderSpec>,
    pub world: WorldConfig,
    pub environment: EnvConfig,
    pub prices: PricePathConfig,
    /// HTTP news endpoint; the static placeholder feed is used when absent
    pub news: Option<ScraperConfig>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            total_steps: 100,
            step_delay_ms: 100,
            seed: None,
            traders: vec![
                TraderSpec::new("AliceTrader", TradingStyle::Conservative, 0.2),
                TraderSpec::new("BobTrader", TradingStyle::Balanced, 0.5),
                TraderSpec::new("EveTrader", TradingStyle::Aggressive, 0.8),
            ],
            world: WorldConfig {
                news_update_interval_secs: 30,
                ..WorldConfig::default()
            },
            environment: EnvConfig::default(),
            prices: PricePathConfig::default(),
            news: None,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RunnerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.environment.validate()?;
        if let Some(news) = &self.news {
            news.validate()?;
        }
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Seed derived for one consumer, so each draws an independent stream
    pub(crate) fn derived_seed(&self, offset: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(offset))
    }
}
