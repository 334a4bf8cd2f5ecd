use serde::{Deserialize, Serialize};

use super::NewsItem;
use crate::values::{Info, Observation};

/// Tag identifying what a stimulus carries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StimulusKind {
    /// Per-step market transition plus news snapshot
    MarketUpdate,
    /// Any other tag; agents ignore kinds they do not recognise
    Other(String),
}

impl StimulusKind {
    pub fn as_str(&self) -> &str {
        match self {
            StimulusKind::MarketUpdate => "MARKET_UPDATE",
            StimulusKind::Other(tag) => tag,
        }
    }
}

/// The four-tuple returned by a market environment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
}

/// Ephemeral per-step event bundle broadcast to every agent
///
/// Built once per step and borrowed by each agent in turn; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stimulus {
    pub kind: StimulusKind,
    pub step: u64,
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
    pub news: Vec<NewsItem>,
}

impl Stimulus {
    /// Compose a market update from an environment step and the news cache
    pub fn market_update(step: u64, outcome: &StepOutcome, news: &[NewsItem]) -> Self {
        Self {
            kind: StimulusKind::MarketUpdate,
            step,
            observation: outcome.observation.clone(),
            reward: outcome.reward,
            done: outcome.done,
            info: outcome.info.clone(),
            news: news.to_vec(),
        }
    }

    /// A stimulus of an arbitrary kind with no market payload
    pub fn other(kind: impl Into<String>, step: u64) -> Self {
        Self {
            kind: StimulusKind::Other(kind.into()),
            step,
            observation: Vec::new(),
            reward: 0.0,
            done: false,
            info: Default::default(),
            news: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentiment;
    use chrono::Utc;

    #[test]
    fn test_market_update_copies_payload() {
        let outcome = StepOutcome {
            observation: vec![1.0, 2.0],
            reward: 0.5,
            done: false,
            info: Default::default(),
        };
        let news = vec![NewsItem::new("Rally", "wire", Sentiment::Positive, Utc::now())];

        let stimulus = Stimulus::market_update(3, &outcome, &news);

        assert_eq!(stimulus.kind, StimulusKind::MarketUpdate);
        assert_eq!(stimulus.step, 3);
        assert_eq!(stimulus.observation, vec![1.0, 2.0]);
        assert_eq!(stimulus.news.len(), 1);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(StimulusKind::MarketUpdate.as_str(), "MARKET_UPDATE");
        assert_eq!(Stimulus::other("CHAT", 0).kind.as_str(), "CHAT");
    }
}
