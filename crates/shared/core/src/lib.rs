//! Agora Core Domain
//!
//! Pure domain types for the Agora trading simulation.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Agent bookkeeping
    AgentDecision,
    Decision,
    MarketData,
    // News
    NewsItem,
    Portfolio,
    Sentiment,
    SkipReason,
    // Per-step events
    StepOutcome,
    StepSnapshot,
    Stimulus,
    StimulusKind,
    TradeSide,
};
pub use values::{Cash, Info, Observation, Price, Ticker, Timestamp};
