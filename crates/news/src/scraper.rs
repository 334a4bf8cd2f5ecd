//! News Scraper
//!
//! Turns raw articles from a [`NewsSource`] into [`NewsItem`]s:
//!
//! 1. Fetch from the source; on any failure log and return nothing
//! 2. Pause for the configured crawl delay (rate limiting, nothing is cached)
//! 3. Normalise headline, link and timestamp; tag sentiment
//! 4. Filter by keywords, then truncate to the per-request maximum

use agora_core::{NewsItem, Timestamp};
use agora_ports::{Clock, ConfigError, NewsFeed};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    HttpNewsSource, NewsSource, RawArticle, ScraperConfig, classify_sentiment,
    filter::filter_by_keywords,
};

/// Best-effort news feed over any [`NewsSource`]
pub struct NewsScraper<S: NewsSource> {
    source: S,
    config: ScraperConfig,
    clock: Arc<dyn Clock>,
}

impl NewsScraper<HttpNewsSource> {
    /// Scraper over HTTP, validating the configuration first
    pub fn http(config: ScraperConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = HttpNewsSource::new(&config)
            .map_err(|e| ConfigError::NewsSource(e.to_string()))?;
        Ok(Self {
            source,
            config,
            clock,
        })
    }
}

impl<S: NewsSource> NewsScraper<S> {
    pub fn new(source: S, config: ScraperConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            clock,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Normalise raw articles into news items
    pub fn process(&self, articles: Vec<RawArticle>) -> Vec<NewsItem> {
        let fetched_at = self.clock.now();
        articles
            .into_iter()
            .map(|article| {
                let headline = article.title.trim().to_string();
                let link = article
                    .url
                    .as_deref()
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .unwrap_or(self.source.location())
                    .to_string();
                let timestamp = parse_timestamp(article.date.as_ref()).unwrap_or(fetched_at);
                let sentiment = classify_sentiment(&headline);
                NewsItem::new(headline, link, sentiment, timestamp)
            })
            .collect()
    }
}

impl<S: NewsSource> NewsFeed for NewsScraper<S> {
    fn fetch_latest(&mut self, keywords: &[String]) -> Vec<NewsItem> {
        log::info!("Starting crawl on {}", self.source.location());

        let articles = match self.source.fetch() {
            Ok(articles) => articles,
            Err(e) => {
                log::error!("Error during crawling: {}", e);
                return Vec::new();
            }
        };

        let delay = self.config.crawl_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let keywords = if keywords.is_empty() {
            self.config.default_keywords.as_slice()
        } else {
            keywords
        };

        let mut items = filter_by_keywords(self.process(articles), keywords);
        items.truncate(self.config.max_articles_per_request);

        log::info!("Retrieved {} news items after filtering", items.len());
        items
    }
}

/// Read an article date, if it is in a recognised form
fn parse_timestamp(value: Option<&Value>) -> Option<Timestamp> {
    match value? {
        Value::Number(n) => from_unix_seconds(n.as_f64()?),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
            }
            from_unix_seconds(s.parse::<f64>().ok()?)
        }
        _ => None,
    }
}

fn from_unix_seconds(secs: f64) -> Option<Timestamp> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.trunc() as i64;
    let nanos = ((secs - secs.trunc()) * 1e9) as u32;
    Utc.timestamp_opt(whole, nanos).single()
}
