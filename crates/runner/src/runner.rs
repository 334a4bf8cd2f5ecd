//! Simulation Runner
//!
//! Builds the trader personas and the world, initializes it with synthetic
//! market data, and drives the stepping loop.

use agora_agents::{StdRandom, create_trader};
use agora_clock::SystemClock;
use agora_core::MarketData;
use agora_market::{PricePathConfig, PricePathGenerator, StockTradingEnvBuilder};
use agora_news::{NewsScraper, StaticNewsFeed};
use agora_ports::{Actor, Clock, NewsFeed};
use agora_world::{LogObserver, RandomActionPolicy, StepResult, World, WorldState};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Result, RunnerConfig};

const POLICY_SEED_OFFSET: u64 = 100;
const PRICE_SEED_OFFSET: u64 = 200;

/// Results of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub steps_taken: u64,
    /// The world hit `max_steps` before `total_steps` were taken
    pub reached_terminal: bool,
    pub total_trades: u64,
    pub trades_by_agent: BTreeMap<String, u64>,
    pub final_state: WorldState,
}

pub struct SimulationRunner {
    config: RunnerConfig,
    clock: Arc<dyn Clock>,
    news_feed: Option<Box<dyn NewsFeed>>,
}

impl SimulationRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            clock: SystemClock::shared(),
            news_feed: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use this feed instead of the one derived from the configuration
    pub fn with_news_feed(mut self, feed: Box<dyn NewsFeed>) -> Self {
        self.news_feed = Some(feed);
        self
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Create the configured trader personas
    pub fn setup_traders(&self) -> Vec<Box<dyn Actor>> {
        let traders: Vec<Box<dyn Actor>> = self
            .config
            .traders
            .iter()
            .enumerate()
            .map(|(idx, spec)| {
                let rng = StdRandom::new(self.config.derived_seed(idx as u64 + 1));
                Box::new(create_trader(
                    &spec.name,
                    spec.style.clone(),
                    spec.risk_tolerance,
                    Box::new(rng),
                )) as Box<dyn Actor>
            })
            .collect();

        log::info!(
            "Created {} trader personas with varying risk tolerances.",
            traders.len()
        );
        traders
    }

    /// Build an uninitialized world around `agents`
    ///
    /// Consumes any feed set with [`SimulationRunner::with_news_feed`].
    pub fn setup_world(&mut self, agents: Vec<Box<dyn Actor>>) -> Result<World> {
        let news_feed = match self.news_feed.take() {
            Some(feed) => feed,
            None => self.build_news_feed()?,
        };
        let policy_rng = StdRandom::new(self.config.derived_seed(POLICY_SEED_OFFSET));

        let world = World::new(self.config.world.clone(), agents, Arc::clone(&self.clock))
            .with_news_feed(news_feed)
            .with_action_policy(Box::new(RandomActionPolicy::new(Box::new(policy_rng))))
            .with_observer(Box::new(LogObserver::new("agora::simulation")));

        log::info!("World created with tickers: {:?}", world.tickers());
        Ok(world)
    }

    /// Synthetic closes for the world's tickers
    pub fn market_data(&self) -> Result<MarketData> {
        let prices = PricePathConfig {
            seed: self
                .config
                .prices
                .seed
                .or(self.config.derived_seed(PRICE_SEED_OFFSET)),
            ..self.config.prices.clone()
        };
        Ok(PricePathGenerator::new(prices).generate(&self.config.world.tickers)?)
    }

    /// Build traders and world, initialize, then step `total_steps` times
    pub fn run(&mut self, total_steps: u64) -> Result<RunSummary> {
        log::info!("Setting up trader personas...");
        let agents = self.setup_traders();

        log::info!("Creating trading world...");
        let mut world = self.setup_world(agents)?;

        let data = self.market_data()?;
        let builder = StockTradingEnvBuilder::new(self.config.environment.clone());
        world.initialize(&builder, &data)?;

        log::info!("Running trading simulation...");
        let summary = self.run_world(&mut world, total_steps)?;
        log::info!("Simulation run complete.");

        Ok(summary)
    }

    /// Step an initialized world until `total_steps` were taken or it is terminal
    pub fn run_world(&self, world: &mut World, total_steps: u64) -> Result<RunSummary> {
        log::info!("Starting trading simulation for {} steps.", total_steps);

        let delay = self.config.step_delay();
        let mut steps_taken = 0;
        let mut reached_terminal = false;
        let mut trades_by_agent: BTreeMap<String, u64> = BTreeMap::new();

        while steps_taken < total_steps {
            match world.step(None)? {
                StepResult::Advanced(snapshot) => {
                    steps_taken += 1;
                    for entry in snapshot.decisions.iter().filter(|d| d.decision.is_trade()) {
                        *trades_by_agent.entry(entry.agent.clone()).or_default() += 1;
                    }
                }
                StepResult::Terminal { step } => {
                    log::warn!(
                        "World terminal at step {} before {} steps were taken",
                        step,
                        total_steps
                    );
                    reached_terminal = true;
                    break;
                }
            }

            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        log::info!("Trading simulation completed.");

        Ok(RunSummary {
            steps_taken,
            reached_terminal,
            total_trades: trades_by_agent.values().sum(),
            trades_by_agent,
            final_state: world.get_state()?,
        })
    }

    fn build_news_feed(&self) -> Result<Box<dyn NewsFeed>> {
        match &self.config.news {
            Some(scraper) => {
                log::info!("Fetching news from {}", scraper.base_url);
                Ok(Box::new(NewsScraper::http(
                    scraper.clone(),
                    Arc::clone(&self.clock),
                )?))
            }
            None => Ok(Box::new(StaticNewsFeed::placeholder(Arc::clone(
                &self.clock,
            )))),
        }
    }
}
