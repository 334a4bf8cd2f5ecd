//! Trading Agent
//!
//! A persona holding cash and a portfolio that reacts to market updates with
//! a placeholder random policy:
//!
//! - sample `r` in [0, 1)
//! - `r < buy_threshold`: buy one share of a random candidate ticker
//! - `r < sell_threshold`: sell one share of a random held ticker
//! - otherwise hold
//!
//! Every trade settles at the fixed `unit_price` regardless of the market.
//! The policy ignores the observation, the reward and the risk tolerance.

use agora_core::{Cash, Decision, Portfolio, Price, SkipReason, Stimulus, StimulusKind, TradeSide};
use agora_ports::{Actor, RandomSource};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::VecDeque;

use crate::{TraderProfile, TradingStyle};

/// Trading parameters shared by all traders built with it
#[derive(Debug, Clone, PartialEq)]
pub struct TraderConfig {
    pub starting_cash: Cash,
    /// Placeholder settlement price for every ticker
    pub unit_price: Price,
    pub shares_per_trade: u64,
    /// Tickers a buy picks from
    pub candidate_tickers: Vec<String>,
    pub buy_threshold: f64,
    pub sell_threshold: f64,
    /// Stimuli kept in episodic memory before the oldest is dropped
    pub memory_capacity: usize,
}

impl Default for TraderConfig {
    fn default() -> Self {
        Self {
            starting_cash: dec!(100000),
            unit_price: dec!(100),
            shares_per_trade: 1,
            candidate_tickers: ["AAPL", "MSFT", "AMZN", "GOOGL", "TSLA"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            buy_threshold: 0.1,
            sell_threshold: 0.2,
            memory_capacity: 64,
        }
    }
}

/// What an agent remembers of one stimulus
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEntry {
    pub step: u64,
    pub kind: StimulusKind,
    pub reward: f64,
    pub headlines: Vec<String>,
}

/// Rule-based random trader
pub struct TradingAgent {
    profile: TraderProfile,
    config: TraderConfig,
    cash: Cash,
    portfolio: Portfolio,
    memory: VecDeque<MemoryEntry>,
    rng: Box<dyn RandomSource>,
}

impl TradingAgent {
    pub fn new(profile: TraderProfile, config: TraderConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            cash: config.starting_cash,
            portfolio: Portfolio::new(),
            memory: VecDeque::with_capacity(config.memory_capacity),
            profile,
            config,
            rng,
        }
    }

    pub fn profile(&self) -> &TraderProfile {
        &self.profile
    }

    pub fn cash(&self) -> Cash {
        self.cash
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn memory(&self) -> &VecDeque<MemoryEntry> {
        &self.memory
    }

    pub fn config(&self) -> &TraderConfig {
        &self.config
    }

    /// Buy `shares_per_trade` of `ticker` at the unit price, if cash allows
    pub fn buy(&mut self, ticker: &str) -> Decision {
        let shares = self.config.shares_per_trade;
        let price = self.config.unit_price;
        let total = price * Decimal::from(shares);

        if self.cash < total {
            log::debug!(
                "{} wants to buy {} but has insufficient cash.",
                self.profile.name,
                ticker
            );
            return Decision::Skipped(SkipReason::InsufficientCash {
                ticker: ticker.to_string(),
                cash: self.cash,
            });
        }

        self.cash -= total;
        self.portfolio.add(ticker, shares);
        log::info!(
            "{} buys {} shares of {}. Cash left: {}",
            self.profile.name,
            shares,
            ticker,
            self.cash
        );

        Decision::Trade {
            side: TradeSide::Buy,
            ticker: ticker.to_string(),
            shares,
            price,
            cash_after: self.cash,
        }
    }

    /// Sell `shares_per_trade` of `ticker` at the unit price, if held
    pub fn sell(&mut self, ticker: &str) -> Decision {
        let shares = self.config.shares_per_trade;
        let price = self.config.unit_price;

        if !self.portfolio.remove(ticker, shares) {
            log::debug!(
                "{} has no shares of {}, cannot sell.",
                self.profile.name,
                ticker
            );
            return Decision::Skipped(SkipReason::NoHoldings);
        }

        self.cash += price * Decimal::from(shares);
        log::info!(
            "{} sells {} shares of {}. Cash now: {}, {} shares still held",
            self.profile.name,
            shares,
            ticker,
            self.cash,
            self.portfolio.total_shares()
        );

        Decision::Trade {
            side: TradeSide::Sell,
            ticker: ticker.to_string(),
            shares,
            price,
            cash_after: self.cash,
        }
    }

    fn listen(&mut self, stimulus: &Stimulus) {
        if self.config.memory_capacity == 0 {
            return;
        }
        if self.memory.len() == self.config.memory_capacity {
            self.memory.pop_front();
        }
        self.memory.push_back(MemoryEntry {
            step: stimulus.step,
            kind: stimulus.kind.clone(),
            reward: stimulus.reward,
            headlines: stimulus.news.iter().map(|n| n.headline.clone()).collect(),
        });
    }

    fn handle_market_update(&mut self, stimulus: &Stimulus) -> Decision {
        log::debug!(
            "{} sees market observation: {:?}",
            self.profile.name,
            stimulus.observation
        );
        log::debug!(
            "{} sees reward: {}, done: {}",
            self.profile.name,
            stimulus.reward,
            stimulus.done
        );
        if !stimulus.news.is_empty() {
            log::debug!(
                "{} sees {} news items",
                self.profile.name,
                stimulus.news.len()
            );
        }

        self.random_trading_decision()
    }

    fn random_trading_decision(&mut self) -> Decision {
        let roll = self.rng.next_f64();

        if roll < self.config.buy_threshold {
            self.buy_random_stock()
        } else if roll < self.config.sell_threshold {
            self.sell_random_stock()
        } else {
            log::debug!("{} decides to hold (no trade).", self.profile.name);
            Decision::Hold
        }
    }

    fn buy_random_stock(&mut self) -> Decision {
        if self.config.candidate_tickers.is_empty() {
            return Decision::Hold;
        }
        let idx = self.rng.next_index(self.config.candidate_tickers.len());
        let ticker = self.config.candidate_tickers[idx].clone();
        self.buy(&ticker)
    }

    fn sell_random_stock(&mut self) -> Decision {
        if self.portfolio.is_empty() {
            log::debug!("{} has no stocks to sell.", self.profile.name);
            return Decision::Skipped(SkipReason::NoHoldings);
        }
        let held = self.portfolio.tickers();
        let ticker = held[self.rng.next_index(held.len())].to_string();
        self.sell(&ticker)
    }
}

impl Actor for TradingAgent {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn receive_and_act(&mut self, stimulus: &Stimulus) -> Decision {
        self.listen(stimulus);

        match &stimulus.kind {
            StimulusKind::MarketUpdate => self.handle_market_update(stimulus),
            StimulusKind::Other(tag) => {
                log::trace!("{} ignores stimulus {}", self.profile.name, tag);
                Decision::Ignored
            }
        }
    }

    fn reset_memory(&mut self) {
        self.memory.clear();
    }

    fn actor_type(&self) -> &'static str {
        "TradingAgent"
    }
}

/// Build a trader persona with default trading parameters
pub fn create_trader(
    name: &str,
    style: impl Into<TradingStyle>,
    risk_tolerance: f64,
    rng: Box<dyn RandomSource>,
) -> TradingAgent {
    TradingAgent::new(
        TraderProfile::new(name, style, risk_tolerance),
        TraderConfig::default(),
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedRandom;
    use agora_core::{NewsItem, Sentiment, StepOutcome};
    use chrono::Utc;

    fn trader(samples: &[f64]) -> TradingAgent {
        create_trader(
            "AliceTrader",
            "conservative",
            0.2,
            Box::new(ScriptedRandom::new(samples.iter().copied())),
        )
    }

    fn market_update(step: u64) -> Stimulus {
        let outcome = StepOutcome {
            observation: vec![100000.0, 100.0],
            reward: 0.0,
            done: false,
            info: Default::default(),
        };
        let news = vec![NewsItem::new("Rally", "wire", Sentiment::Positive, Utc::now())];
        Stimulus::market_update(step, &outcome, &news)
    }

    #[test]
    fn test_buy_then_sell_bookkeeping() {
        let mut agent = trader(&[]);
        assert_eq!(agent.cash(), dec!(100000));

        let bought = agent.buy("AAPL");
        assert!(bought.is_trade());
        assert_eq!(agent.cash(), dec!(99900));
        assert_eq!(agent.portfolio().shares("AAPL"), 1);

        let sold = agent.sell("AAPL");
        assert!(sold.is_trade());
        assert_eq!(agent.cash(), dec!(100000));
        assert!(!agent.portfolio().contains("AAPL"));
    }

    #[test]
    fn test_buy_with_insufficient_cash_is_skipped() {
        let config = TraderConfig {
            starting_cash: dec!(99),
            ..Default::default()
        };
        let profile = TraderProfile::new("Broke", "balanced", 0.5);
        let mut agent = TradingAgent::new(profile, config, Box::new(ScriptedRandom::new([0.0])));

        let decision = agent.buy("MSFT");

        assert!(matches!(
            decision,
            Decision::Skipped(SkipReason::InsufficientCash { .. })
        ));
        assert_eq!(agent.cash(), dec!(99));
        assert!(agent.portfolio().is_empty());
    }

    #[test]
    fn test_buy_allowed_with_exact_cash() {
        let config = TraderConfig {
            starting_cash: dec!(100),
            ..Default::default()
        };
        let profile = TraderProfile::new("Exact", "balanced", 0.5);
        let mut agent = TradingAgent::new(profile, config, Box::new(ScriptedRandom::new([0.0])));

        assert!(agent.buy("MSFT").is_trade());
        assert_eq!(agent.cash(), Decimal::ZERO);
    }

    #[test]
    fn test_sell_without_holdings_is_skipped() {
        let mut agent = trader(&[]);
        assert_eq!(agent.sell("TSLA"), Decision::Skipped(SkipReason::NoHoldings));
    }

    #[test]
    fn test_threshold_buy() {
        // 0.05 < 0.1 buys; 0.5 picks the middle candidate (AMZN)
        let mut agent = trader(&[0.05, 0.5]);

        let decision = agent.receive_and_act(&market_update(0));

        match decision {
            Decision::Trade { side, ticker, .. } => {
                assert_eq!(side, TradeSide::Buy);
                assert_eq!(ticker, "AMZN");
            }
            other => panic!("expected buy, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_sell() {
        let mut agent = trader(&[0.15, 0.0]);
        agent.buy("GOOGL");

        let decision = agent.receive_and_act(&market_update(0));

        assert!(matches!(
            decision,
            Decision::Trade {
                side: TradeSide::Sell,
                ..
            }
        ));
        assert!(agent.portfolio().is_empty());
    }

    #[test]
    fn test_sell_roll_with_empty_portfolio() {
        let mut agent = trader(&[0.15]);

        let decision = agent.receive_and_act(&market_update(0));
        assert_eq!(decision, Decision::Skipped(SkipReason::NoHoldings));
    }

    #[test]
    fn test_threshold_hold() {
        let mut agent = trader(&[0.2, 0.99]);

        assert_eq!(agent.receive_and_act(&market_update(0)), Decision::Hold);
        assert_eq!(agent.receive_and_act(&market_update(1)), Decision::Hold);
        assert_eq!(agent.cash(), dec!(100000));
    }

    #[test]
    fn test_unknown_stimulus_ignored() {
        let mut agent = trader(&[0.0]);

        let decision = agent.receive_and_act(&Stimulus::other("CONVERSATION", 0));

        assert_eq!(decision, Decision::Ignored);
        assert!(agent.portfolio().is_empty());
    }

    #[test]
    fn test_memory_records_and_resets() {
        let mut agent = trader(&[0.5]);
        agent.receive_and_act(&market_update(0));
        agent.receive_and_act(&market_update(1));

        assert_eq!(agent.memory().len(), 2);
        assert_eq!(agent.memory()[1].headlines, vec!["Rally".to_string()]);

        agent.buy("AAPL");
        agent.reset_memory();

        assert!(agent.memory().is_empty());
        // Financial state survives a memory reset
        assert_eq!(agent.portfolio().shares("AAPL"), 1);
    }

    #[test]
    fn test_memory_is_bounded() {
        let config = TraderConfig {
            memory_capacity: 2,
            ..Default::default()
        };
        let profile = TraderProfile::new("Forgetful", "balanced", 0.5);
        let mut agent = TradingAgent::new(profile, config, Box::new(ScriptedRandom::new([0.5])));

        for step in 0..5 {
            agent.receive_and_act(&market_update(step));
        }

        assert_eq!(agent.memory().len(), 2);
        assert_eq!(agent.memory()[0].step, 3);
    }
}
