use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment tag attached to a news headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single news item delivered to agents
///
/// Immutable once produced. The world's news cache is a flat ordered
/// sequence of these, replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    /// Link or source the headline came from
    pub source: String,
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
}

impl NewsItem {
    pub fn new(
        headline: impl Into<String>,
        source: impl Into<String>,
        sentiment: Sentiment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            headline: headline.into(),
            source: source.into(),
            sentiment,
            timestamp,
        }
    }

    /// Case-insensitive check against a list of keywords (OR semantics)
    ///
    /// An empty keyword list matches everything.
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        if keywords.is_empty() {
            return true;
        }
        let headline = self.headline.to_lowercase();
        keywords
            .iter()
            .any(|keyword| headline.contains(&keyword.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(headline: &str) -> NewsItem {
        NewsItem::new(headline, "test", Sentiment::Neutral, Utc::now())
    }

    #[test]
    fn test_matches_any_is_case_insensitive() {
        let keywords = vec!["STOCK".to_string(), "market".to_string()];

        assert!(item("Stock rally continues").matches_any(&keywords));
        assert!(!item("Weather update").matches_any(&keywords));
    }

    #[test]
    fn test_empty_keywords_match_everything() {
        assert!(item("Anything at all").matches_any(&[]));
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }
}
