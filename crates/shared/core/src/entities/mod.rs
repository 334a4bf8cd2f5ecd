mod decision;
mod market_data;
mod news;
mod portfolio;
mod snapshot;
mod stimulus;

pub use decision::{Decision, SkipReason, TradeSide};
pub use market_data::MarketData;
pub use news::{NewsItem, Sentiment};
pub use portfolio::Portfolio;
pub use snapshot::{AgentDecision, StepSnapshot};
pub use stimulus::{StepOutcome, Stimulus, StimulusKind};
