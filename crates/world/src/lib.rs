//! Agora World
//!
//! The simulation clock: a bounded stepping loop that owns a market
//! environment and a set of agents, refreshes news on an interval, and
//! broadcasts one market update per step.
//!
//! ## Architecture
//!
//! ```text
//!          ┌──────────────┐        ┌────────────────────┐
//!          │   NewsFeed   │        │  MarketEnvironment │
//!          └──────┬───────┘        └─────────┬──────────┘
//!                 │ news (on interval)       │ (obs, reward, done, info)
//!                 └────────────┬─────────────┘
//!                              ▼
//!                      ┌───────────────┐      ┌──────────────────────┐
//!                      │     World     │─────▶│  SimulationObserver  │
//!                      └───────┬───────┘      └──────────────────────┘
//!                              │ Stimulus (registration order)
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!         ┌─────────┐     ┌─────────┐     ┌─────────┐
//!         │ Actor A │     │ Actor B │     │ Actor C │
//!         └─────────┘     └─────────┘     └─────────┘
//! ```

mod config;
mod error;
mod observer;
mod policy;
mod world;

pub use config::WorldConfig;
pub use error::{Result, WorldError};
pub use observer::{LogObserver, ObservedEvent, RecordingObserver};
pub use policy::{HoldPolicy, RandomActionPolicy};
pub use world::{StepResult, World, WorldState};
