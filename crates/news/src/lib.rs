//! Agora News
//!
//! Best-effort news retrieval for the simulation. Every feed here honours the
//! `NewsFeed` contract: failures are logged and surface as an empty list.
//!
//! - [`NewsScraper`]: rate-limited fetch from a [`NewsSource`], normalisation,
//!   keyword filtering, sentiment tagging and truncation
//! - [`HttpNewsSource`]: blocking HTTP source returning JSON articles
//! - [`StaticNewsFeed`]: fixed placeholder headlines stamped with clock time

mod config;
mod filter;
mod scraper;
mod sentiment;
mod source;
mod static_feed;

pub use config::ScraperConfig;
pub use filter::{filter_by_date_range, filter_by_keywords};
pub use scraper::NewsScraper;
pub use sentiment::classify_sentiment;
pub use source::{HttpNewsSource, NewsSource, NewsSourceError, RawArticle};
pub use static_feed::StaticNewsFeed;
