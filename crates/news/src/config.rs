use agora_ports::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for news scraping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// URL articles are fetched from
    pub base_url: String,
    /// Optional bearer token sent with each request
    pub api_key: Option<String>,
    /// Upper bound on items returned per fetch
    pub max_articles_per_request: usize,
    /// Keywords applied when the caller passes none
    pub default_keywords: Vec<String>,
    /// Courtesy pause after each successful fetch (seconds)
    pub crawl_delay_secs: u64,
    /// Transport timeout per request (seconds)
    pub request_timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://crawl4ai.com/mkdocs/".to_string(),
            api_key: None,
            max_articles_per_request: 100,
            default_keywords: Vec::new(),
            crawl_delay_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

impl ScraperConfig {
    /// Default settings pointed at another URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if self.max_articles_per_request < 1 {
            return Err(ConfigError::InvalidMaxArticles);
        }
        if self.request_timeout_secs < 1 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn crawl_delay(&self) -> Duration {
        Duration::from_secs(self.crawl_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
