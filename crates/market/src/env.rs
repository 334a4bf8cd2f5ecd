//! Stock Trading Environment
//!
//! Multi-stock environment stepping day by day over a close-price table.
//!
//! Observation layout: `[cash, price_1..price_n, shares_1..shares_n]`.
//! Action layout: one signed share count per ticker, clamped to `[-hmax, hmax]`.

use agora_core::{Info, MarketData, Observation, StepOutcome};
use agora_ports::{
    ConfigError, EnvironmentBuilder, EnvironmentError, EnvironmentResult, EnvironmentSpec,
    MarketEnvironment,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Trading parameters for the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Maximum shares bought or sold per ticker per step
    pub hmax: i64,
    /// Proportional cost charged on every buy and sell
    pub transaction_cost_pct: f64,
    /// Multiplier applied to the change in total asset value
    pub reward_scaling: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            hmax: 100,
            transaction_cost_pct: 0.001,
            reward_scaling: 1e-4,
        }
    }
}

impl EnvConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hmax < 0 {
            return Err(ConfigError::InvalidEnvironment(format!(
                "hmax must not be negative, got {}",
                self.hmax
            )));
        }
        if !(self.transaction_cost_pct.is_finite() && self.transaction_cost_pct >= 0.0) {
            return Err(ConfigError::InvalidEnvironment(format!(
                "transaction_cost_pct must be a non-negative number, got {}",
                self.transaction_cost_pct
            )));
        }
        if !self.reward_scaling.is_finite() {
            return Err(ConfigError::InvalidEnvironment(format!(
                "reward_scaling must be finite, got {}",
                self.reward_scaling
            )));
        }
        Ok(())
    }
}

/// Day-by-day trading environment over a close-price table
pub struct StockTradingEnv {
    config: EnvConfig,
    data: MarketData,
    initial_amount: f64,
    day: usize,
    cash: f64,
    holdings: Vec<i64>,
    done: bool,
    total_cost: f64,
    trades: u64,
}

impl StockTradingEnv {
    pub fn new(data: MarketData, initial_amount: f64, config: EnvConfig) -> Self {
        let num_tickers = data.num_tickers();
        let done = data.num_days() <= 1;

        Self {
            config,
            data,
            initial_amount,
            day: 0,
            cash: initial_amount,
            holdings: vec![0; num_tickers],
            done,
            total_cost: 0.0,
            trades: 0,
        }
    }

    pub fn day(&self) -> usize {
        self.day
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn holdings(&self) -> &[i64] {
        &self.holdings
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Cash plus holdings marked at the current day's closes
    pub fn total_asset(&self) -> f64 {
        let prices = self.current_prices();
        self.cash
            + prices
                .iter()
                .zip(&self.holdings)
                .map(|(price, shares)| price * *shares as f64)
                .sum::<f64>()
    }

    fn current_prices(&self) -> &[f64] {
        // MarketData guarantees at least one row and `day` never passes the last one
        self.data.prices(self.day).unwrap_or(&[])
    }

    fn sell(&mut self, idx: usize, requested: i64) {
        let price = self.current_prices()[idx];
        let shares = requested.min(self.holdings[idx]);
        if shares <= 0 {
            return;
        }

        let gross = price * shares as f64;
        let cost = gross * self.config.transaction_cost_pct;
        self.cash += gross - cost;
        self.holdings[idx] -= shares;
        self.total_cost += cost;
        self.trades += 1;
    }

    fn buy(&mut self, idx: usize, requested: i64) {
        let price = self.current_prices()[idx];
        let unit_cost = price * (1.0 + self.config.transaction_cost_pct);
        let affordable = (self.cash / unit_cost).floor() as i64;
        let shares = requested.min(affordable);
        if shares <= 0 {
            return;
        }

        let gross = price * shares as f64;
        let cost = gross * self.config.transaction_cost_pct;
        self.cash -= gross + cost;
        self.holdings[idx] += shares;
        self.total_cost += cost;
        self.trades += 1;
    }

    fn info(&self) -> Info {
        let mut info = Info::new();
        info.insert("day".to_string(), json!(self.day));
        info.insert("total_asset".to_string(), json!(self.total_asset()));
        info.insert("cost".to_string(), json!(self.total_cost));
        info.insert("trades".to_string(), json!(self.trades));
        info
    }
}

impl MarketEnvironment for StockTradingEnv {
    fn step(&mut self, actions: &[i64]) -> EnvironmentResult<StepOutcome> {
        let num_tickers = self.holdings.len();
        if actions.len() > num_tickers {
            return Err(EnvironmentError::InvalidAction(format!(
                "{} actions for {} tickers",
                actions.len(),
                num_tickers
            )));
        }

        if self.done {
            return Ok(StepOutcome {
                observation: self.observation(),
                reward: 0.0,
                done: true,
                info: self.info(),
            });
        }

        let begin_asset = self.total_asset();
        let hmax = self.config.hmax;
        let clamped: Vec<i64> = (0..num_tickers)
            .map(|i| actions.get(i).copied().unwrap_or(0).clamp(-hmax, hmax))
            .collect();

        // Sells first so their proceeds can fund buys
        for (idx, action) in clamped.iter().enumerate() {
            if *action < 0 {
                self.sell(idx, -action);
            }
        }
        for (idx, action) in clamped.iter().enumerate() {
            if *action > 0 {
                self.buy(idx, *action);
            }
        }

        self.day += 1;
        self.done = self.day + 1 >= self.data.num_days();

        let end_asset = self.total_asset();
        let reward = (end_asset - begin_asset) * self.config.reward_scaling;

        log::trace!(
            "day {}: actions={:?} asset {:.2} -> {:.2}",
            self.day,
            clamped,
            begin_asset,
            end_asset
        );

        Ok(StepOutcome {
            observation: self.observation(),
            reward,
            done: self.done,
            info: self.info(),
        })
    }

    fn reset(&mut self) -> EnvironmentResult<Observation> {
        self.day = 0;
        self.cash = self.initial_amount;
        self.holdings.iter_mut().for_each(|h| *h = 0);
        self.done = self.data.num_days() <= 1;
        self.total_cost = 0.0;
        self.trades = 0;
        Ok(self.observation())
    }

    fn observation(&self) -> Observation {
        let mut observation = Vec::with_capacity(1 + 2 * self.holdings.len());
        observation.push(self.cash);
        observation.extend_from_slice(self.current_prices());
        observation.extend(self.holdings.iter().map(|h| *h as f64));
        observation
    }

    fn name(&self) -> &str {
        "StockTradingEnv"
    }
}

/// Builds [`StockTradingEnv`] instances for a world
#[derive(Debug, Clone, Default)]
pub struct StockTradingEnvBuilder {
    config: EnvConfig,
}

impl StockTradingEnvBuilder {
    pub fn new(config: EnvConfig) -> Self {
        Self { config }
    }
}

impl EnvironmentBuilder for StockTradingEnvBuilder {
    /// Project the data onto the world's tickers (in the world's order)
    fn build(
        &self,
        data: &MarketData,
        spec: &EnvironmentSpec,
    ) -> EnvironmentResult<Box<dyn MarketEnvironment>> {
        self.config
            .validate()
            .map_err(|e| EnvironmentError::Data(e.to_string()))?;

        let mut columns = Vec::with_capacity(spec.tickers.len());
        for ticker in &spec.tickers {
            let idx = data
                .tickers()
                .iter()
                .position(|t| t == ticker)
                .ok_or_else(|| EnvironmentError::Data(format!("no prices for {}", ticker)))?;
            columns.push(idx);
        }

        let rows = (0..data.num_days())
            .filter_map(|day| data.prices(day))
            .map(|row| columns.iter().map(|&idx| row[idx]).collect())
            .collect();
        let projected =
            MarketData::new(spec.tickers.clone(), rows).map_err(EnvironmentError::Data)?;

        log::info!(
            "Building StockTradingEnv: {} tickers, {} days, capital {}",
            projected.num_tickers(),
            projected.num_days(),
            spec.initial_capital
        );

        Ok(Box::new(StockTradingEnv::new(
            projected,
            spec.initial_capital,
            self.config.clone(),
        )))
    }
}
