use agora_core::{NewsItem, Sentiment};
use agora_ports::{Clock, NewsFeed};
use std::sync::Arc;

const SOURCE: &str = "placeholder";

/// Feed serving a fixed set of headlines, stamped with the clock's time
///
/// Stands in for a real scraper when no news endpoint is configured.
pub struct StaticNewsFeed {
    headlines: Vec<(String, Sentiment)>,
    clock: Arc<dyn Clock>,
}

impl StaticNewsFeed {
    pub fn new(headlines: Vec<(String, Sentiment)>, clock: Arc<dyn Clock>) -> Self {
        Self { headlines, clock }
    }

    /// The two placeholder market headlines
    pub fn placeholder(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            vec![
                (
                    "Placeholder: Market sees unexpected rally".to_string(),
                    Sentiment::Positive,
                ),
                (
                    "Placeholder: Tech stocks slump amid regulation fears".to_string(),
                    Sentiment::Negative,
                ),
            ],
            clock,
        )
    }
}

impl NewsFeed for StaticNewsFeed {
    fn fetch_latest(&mut self, keywords: &[String]) -> Vec<NewsItem> {
        let now = self.clock.now();
        self.headlines
            .iter()
            .map(|(headline, sentiment)| NewsItem::new(headline.as_str(), SOURCE, *sentiment, now))
            .filter(|item| item.matches_any(keywords))
            .collect()
    }
}
