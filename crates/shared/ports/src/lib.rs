//! Agora Ports
//!
//! Port definitions (traits) for the Agora trading simulation.
//! These define the boundaries between the stepping loop and its
//! collaborators: the market environment, the news feed, the agents,
//! time, randomness, and observability.

mod actor;
mod clock;
mod environment;
mod error;
mod news;
mod observer;
mod policy;
mod random;

pub use actor::Actor;
pub use clock::Clock;
pub use environment::{EnvironmentBuilder, EnvironmentSpec, MarketEnvironment};
pub use error::{ConfigError, EnvironmentError, EnvironmentResult};
pub use news::NewsFeed;
pub use observer::{NullObserver, SimulationObserver};
pub use policy::ActionPolicy;
pub use random::RandomSource;
