//! World
//!
//! The simulation clock. Owns the market environment and the agents and
//! advances them together one bounded step at a time:
//!
//! 1. Refresh the news cache when the refresh interval has elapsed
//! 2. Step the market environment with the given (or proposed) actions
//! 3. Broadcast a market update to every agent in registration order
//! 4. Record the step and notify the observer
//!
//! ```text
//! Uninitialized --initialize--> Ready(0) --step--> Ready(k) ...
//!     --step at k == max_steps--> Terminal --reset--> Ready(0)
//! ```

use agora_core::{
    AgentDecision, Info, MarketData, NewsItem, Observation, StepOutcome, StepSnapshot, Stimulus,
    Ticker, Timestamp,
};
use agora_ports::{
    ActionPolicy, Actor, Clock, ConfigError, EnvironmentBuilder, EnvironmentSpec,
    MarketEnvironment, NewsFeed, NullObserver, SimulationObserver,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{HoldPolicy, Result, WorldConfig, WorldError};

/// Outcome of a call to [`World::step`]
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// The world moved forward; carries the record of this step
    Advanced(StepSnapshot),
    /// The step bound was already reached; nothing changed
    Terminal { step: u64 },
}

impl StepResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepResult::Terminal { .. })
    }

    pub fn snapshot(&self) -> Option<&StepSnapshot> {
        match self {
            StepResult::Advanced(snapshot) => Some(snapshot),
            StepResult::Terminal { .. } => None,
        }
    }
}

/// Read-only view of a world
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldState {
    pub name: String,
    pub step: u64,
    pub max_steps: u64,
    pub terminal: bool,
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
    pub news: Vec<NewsItem>,
}

pub struct World {
    config: WorldConfig,
    agents: Vec<Box<dyn Actor>>,
    clock: Arc<dyn Clock>,
    environment: Option<Box<dyn MarketEnvironment>>,
    news_feed: Option<Box<dyn NewsFeed>>,
    action_policy: Box<dyn ActionPolicy>,
    observer: Box<dyn SimulationObserver>,
    step: u64,
    news: Vec<NewsItem>,
    last_refresh: Option<Timestamp>,
    last: StepOutcome,
    history: Vec<StepSnapshot>,
}

impl World {
    /// Create an uninitialized world
    ///
    /// Agents are broadcast to in the order given here, followed by any
    /// added later with [`World::add_agent`].
    pub fn new(config: WorldConfig, agents: Vec<Box<dyn Actor>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            agents,
            clock,
            environment: None,
            news_feed: None,
            action_policy: Box::new(HoldPolicy),
            observer: Box::new(NullObserver),
            step: 0,
            news: Vec::new(),
            last_refresh: None,
            last: empty_outcome(),
            history: Vec::new(),
        }
    }

    pub fn with_news_feed(mut self, feed: Box<dyn NewsFeed>) -> Self {
        self.news_feed = Some(feed);
        self
    }

    /// Policy consulted when `step` is called without actions
    pub fn with_action_policy(mut self, policy: Box<dyn ActionPolicy>) -> Self {
        self.action_policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn SimulationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn add_agent(&mut self, agent: Box<dyn Actor>) {
        self.agents.push(agent);
    }

    /// Validate the configuration and build the market environment
    pub fn initialize(
        &mut self,
        builder: &dyn EnvironmentBuilder,
        market_data: &MarketData,
    ) -> Result<WorldState> {
        self.config.validate()?;
        if market_data.is_empty() {
            return Err(ConfigError::EmptyMarketData.into());
        }

        let spec = EnvironmentSpec {
            tickers: self.config.tickers.clone(),
            initial_capital: self.config.initial_capital,
        };
        let environment = builder.build(market_data, &spec)?;
        let environment_name = environment.name().to_string();

        self.last = StepOutcome {
            observation: environment.observation(),
            ..empty_outcome()
        };
        self.environment = Some(environment);
        self.step = 0;
        self.news.clear();
        self.history.clear();
        self.last_refresh = Some(self.clock.now());

        log::info!(
            "World '{}' initialized on {} with tickers {:?}, {} agents and policy {}",
            self.config.name,
            environment_name,
            self.config.tickers,
            self.agents.len(),
            self.action_policy.name()
        );

        self.get_state()
    }

    /// Advance the world by one step
    ///
    /// `actions` goes to the environment as is; `None` asks the action
    /// policy. Once `max_steps` is reached every call returns
    /// [`StepResult::Terminal`] without touching any state.
    pub fn step(&mut self, actions: Option<Vec<i64>>) -> Result<StepResult> {
        if self.environment.is_none() {
            return Err(WorldError::NotInitialized);
        }

        if self.step >= self.config.max_steps {
            log::info!("Reached max steps. No further stepping possible.");
            self.observer.on_terminal(self.step);
            return Ok(StepResult::Terminal { step: self.step });
        }

        if self.config.enable_news {
            self.refresh_news_if_due();
        }

        let actions = match actions {
            Some(actions) => actions,
            None => self
                .action_policy
                .propose(&self.config.tickers, &self.last.observation),
        };

        let environment = self
            .environment
            .as_mut()
            .ok_or(WorldError::NotInitialized)?;
        let outcome = environment.step(&actions)?;

        let stimulus = Stimulus::market_update(self.step, &outcome, &self.news);
        let decisions = self
            .agents
            .iter_mut()
            .map(|agent| AgentDecision {
                agent: agent.name().to_string(),
                decision: agent.receive_and_act(&stimulus),
            })
            .collect();

        log::debug!(
            "Step {}: observation={:?} reward={} done={}",
            self.step,
            outcome.observation,
            outcome.reward,
            outcome.done
        );

        let snapshot = StepSnapshot {
            step: self.step,
            observation: outcome.observation.clone(),
            reward: outcome.reward,
            actions,
            done: outcome.done,
            info: outcome.info.clone(),
            decisions,
        };

        self.last = outcome;
        self.step += 1;
        self.history.push(snapshot.clone());
        self.observer.on_step(&snapshot);

        Ok(StepResult::Advanced(snapshot))
    }

    /// Return the world to step 0 without rebuilding anything it owns
    ///
    /// Step counter, news, history and agent memory are cleared first.
    /// On a world that was never initialized there is no environment to
    /// reset, so the call then fails with [`WorldError::NotInitialized`].
    pub fn reset(&mut self) -> Result<WorldState> {
        log::info!("Resetting world '{}'", self.config.name);

        self.step = 0;
        self.news.clear();
        self.history.clear();
        self.last = empty_outcome();
        for agent in self.agents.iter_mut() {
            agent.reset_memory();
        }

        let environment = self
            .environment
            .as_mut()
            .ok_or(WorldError::NotInitialized)?;
        self.last.observation = environment.reset()?;
        self.last_refresh = Some(self.clock.now());

        self.observer.on_reset();
        self.get_state()
    }

    pub fn get_state(&self) -> Result<WorldState> {
        if self.environment.is_none() {
            return Err(WorldError::NotInitialized);
        }

        Ok(WorldState {
            name: self.config.name.clone(),
            step: self.step,
            max_steps: self.config.max_steps,
            terminal: self.is_terminal(),
            observation: self.last.observation.clone(),
            reward: self.last.reward,
            done: self.last.done,
            info: self.last.info.clone(),
            news: self.news.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn current_step(&self) -> u64 {
        self.step
    }

    /// Every step taken since the last initialize or reset
    pub fn history(&self) -> &[StepSnapshot] {
        &self.history
    }

    pub fn agents(&self) -> &[Box<dyn Actor>] {
        &self.agents
    }

    /// Current news cache
    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.config.tickers
    }

    pub fn initial_capital(&self) -> f64 {
        self.config.initial_capital
    }

    pub fn is_initialized(&self) -> bool {
        self.environment.is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.step >= self.config.max_steps
    }

    fn refresh_news_if_due(&mut self) {
        let Some(feed) = self.news_feed.as_mut() else {
            return;
        };

        let due = match self.last_refresh {
            Some(last) => self.clock.elapsed_since(last) >= self.config.news_interval(),
            None => true,
        };
        if !due {
            return;
        }

        self.news = feed.fetch_latest(&self.config.news_keywords);
        self.last_refresh = Some(self.clock.now());
        log::info!("Fetched {} news items", self.news.len());
        self.observer.on_news_refresh(&self.news);
    }
}

fn empty_outcome() -> StepOutcome {
    StepOutcome {
        observation: Vec::new(),
        reward: 0.0,
        done: false,
        info: Info::new(),
    }
}
