//! News sources: where raw articles come from before normalisation.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::ScraperConfig;

#[derive(Error, Debug)]
pub enum NewsSourceError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Failed to parse articles: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Format(String),
}

/// An article as delivered by a source, before normalisation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    /// RFC 3339 string, `YYYY-MM-DD`, or unix seconds (string or number)
    #[serde(default)]
    pub date: Option<Value>,
}

impl RawArticle {
    pub fn new(title: impl Into<String>, url: Option<&str>, date: Option<Value>) -> Self {
        Self {
            title: title.into(),
            url: url.map(str::to_string),
            date,
        }
    }
}

/// Port for a raw article source
pub trait NewsSource: Send {
    fn fetch(&mut self) -> Result<Vec<RawArticle>, NewsSourceError>;

    /// Location used as the link when an article carries none
    fn location(&self) -> &str;
}

/// Blocking HTTP source
///
/// Accepts either a top-level JSON array of articles or an object whose
/// `articles` field holds that array.
pub struct HttpNewsSource {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpNewsSource {
    pub fn new(config: &ScraperConfig) -> Result<Self, NewsSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Pull the article list out of a response body
    pub fn parse_body(body: Value) -> Result<Vec<RawArticle>, NewsSourceError> {
        match body {
            Value::Array(_) => Ok(serde_json::from_value(body)?),
            Value::Object(mut map) => match map.remove("articles") {
                Some(articles @ Value::Array(_)) => Ok(serde_json::from_value(articles)?),
                _ => Err(NewsSourceError::Format(
                    "object without an `articles` array".to_string(),
                )),
            },
            other => Err(NewsSourceError::Format(format!(
                "expected array or object, got {}",
                other
            ))),
        }
    }
}

impl NewsSource for HttpNewsSource {
    fn fetch(&mut self) -> Result<Vec<RawArticle>, NewsSourceError> {
        let mut request = self.client.get(&self.base_url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        log::debug!("GET {}", self.base_url);
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsSourceError::Status(status.as_u16()));
        }

        let body: Value = response.json()?;
        Self::parse_body(body)
    }

    fn location(&self) -> &str {
        &self.base_url
    }
}
