//! World configuration

use agora_core::Ticker;
use agora_ports::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub name: String,
    /// Tickers traded in the environment, in observation order
    pub tickers: Vec<Ticker>,
    /// Starting cash of the environment's account
    pub initial_capital: f64,
    pub enable_news: bool,
    /// Minimum seconds between two news refreshes
    pub news_update_interval_secs: u64,
    /// Keywords passed to the news feed; empty means unfiltered
    pub news_keywords: Vec<String>,
    /// Upper bound on the step counter
    pub max_steps: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: "Stock Market Simulation".to_string(),
            tickers: ["AAPL", "MSFT", "AMZN", "TSLA", "GOOGL"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            initial_capital: 1e5,
            enable_news: true,
            news_update_interval_secs: 60,
            news_keywords: vec![
                "stock".to_string(),
                "market".to_string(),
                "trading".to_string(),
            ],
            max_steps: 200,
        }
    }
}

impl WorldConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tickers(mut self, tickers: &[&str]) -> Self {
        self.tickers = tickers.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_news(mut self, enabled: bool, interval_secs: u64) -> Self {
        self.enable_news = enabled;
        self.news_update_interval_secs = interval_secs;
        self
    }

    pub fn news_interval(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.news_update_interval_secs as i64)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidMaxSteps(self.max_steps));
        }
        if self.enable_news && self.news_update_interval_secs == 0 {
            return Err(ConfigError::InvalidInterval(
                "news_update_interval_secs must be positive when news is enabled".to_string(),
            ));
        }
        if self.tickers.is_empty() {
            return Err(ConfigError::NoTickers);
        }
        if !(self.initial_capital.is_finite() && self.initial_capital > 0.0) {
            return Err(ConfigError::InvalidCapital(self.initial_capital.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_max_steps() {
        let config = WorldConfig::default().with_max_steps(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxSteps(0))
        ));
    }

    #[test]
    fn test_zero_interval_only_matters_with_news() {
        assert!(matches!(
            WorldConfig::default().with_news(true, 0).validate(),
            Err(ConfigError::InvalidInterval(_))
        ));
        assert!(WorldConfig::default().with_news(false, 0).validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_tickers_and_bad_capital() {
        let config = WorldConfig {
            tickers: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoTickers)));

        let config = WorldConfig {
            initial_capital: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCapital(_))
        ));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: WorldConfig = serde_json::from_str(r#"{"max_steps": 10}"#).unwrap();

        assert_eq!(config.max_steps, 10);
        assert_eq!(config.tickers.len(), 5);
        assert_eq!(config.news_interval(), chrono::Duration::seconds(60));
    }
}
