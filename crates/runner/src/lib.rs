//! Agora Runner - Trading Simulation Orchestration
//!
//! Wires the simulation together:
//!
//! - **Traders**: persona creation from configuration
//! - **World**: news feed, action policy and observer selection
//! - **Market data**: seeded synthetic price paths
//! - **Loop**: bounded stepping with an inter-step delay
//!
//! ## Architecture
//!
//! ```text
//!   RunnerConfig ──▶ SimulationRunner
//!                       │
//!        ┌──────────────┼───────────────────┐
//!        ▼              ▼                   ▼
//!   setup_traders   setup_world        market_data
//!        │              │                   │
//!        └──────▶ World::initialize ◀───────┘
//!                       │
//!                       ▼
//!                 run_world (step loop) ──▶ RunSummary
//! ```

pub mod config;
pub mod error;
pub mod runner;

pub use config::{RunnerConfig, TraderSpec};
pub use error::{Result, RunnerError};
pub use runner::{RunSummary, SimulationRunner};
