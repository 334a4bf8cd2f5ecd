//! Agora Agents
//!
//! Trader personas that live inside a simulated world.
//!
//! - [`TradingAgent`]: rule-based random trader holding cash and a portfolio
//! - [`TraderProfile`] / [`TradingStyle`]: persona description
//! - [`create_trader`]: factory used by the runner
//! - [`StdRandom`] / [`ScriptedRandom`]: random sources for decisions

mod profile;
mod random;
mod trader;

pub use profile::{TraderProfile, TradingStyle};
pub use random::{ScriptedRandom, StdRandom};
pub use trader::{MemoryEntry, TraderConfig, TradingAgent, create_trader};
