use thiserror::Error;

/// Invalid construction parameters, fatal at construction time
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Market data is empty")]
    EmptyMarketData,

    #[error("Invalid market data: {0}")]
    InvalidMarketData(String),

    #[error("max_steps must be at least 1, got {0}")]
    InvalidMaxSteps(u64),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("No tickers configured")]
    NoTickers,

    #[error("Invalid initial capital: {0}")]
    InvalidCapital(String),

    #[error("Invalid environment config: {0}")]
    InvalidEnvironment(String),

    #[error("base_url must be provided")]
    MissingBaseUrl,

    #[error("max_articles_per_request must be positive")]
    InvalidMaxArticles,

    #[error("request_timeout_secs must be positive")]
    InvalidTimeout,

    #[error("Invalid news source: {0}")]
    NewsSource(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures raised by a market environment
///
/// The simulation core performs no retry or translation for these; they
/// propagate to the caller of `step`/`reset`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Market data error: {0}")]
    Data(String),

    #[error("Environment failure: {0}")]
    Other(String),
}

pub type EnvironmentResult<T> = std::result::Result<T, EnvironmentError>;
