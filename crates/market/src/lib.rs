//! Agora Market
//!
//! The market side of the simulation:
//!
//! - [`StockTradingEnv`]: a step-based multi-stock trading environment that
//!   answers every action vector with an (observation, reward, done, info)
//!   four-tuple
//! - [`StockTradingEnvBuilder`]: builds environments from [`MarketData`]
//!   through the `EnvironmentBuilder` port
//! - [`PricePathGenerator`]: seeded random-walk close prices, used when no
//!   external market data is supplied
//!
//! [`MarketData`]: agora_core::MarketData

mod env;
mod generator;

pub use env::{EnvConfig, StockTradingEnv, StockTradingEnvBuilder};
pub use generator::{PricePathConfig, PricePathGenerator, Scenario};
