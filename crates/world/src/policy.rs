//! Placeholder action policies
//!
//! Used when `World::step` is called without an explicit action vector.

use agora_core::Ticker;
use agora_ports::{ActionPolicy, RandomSource};

/// Draws an independent integer in `[low, high]` for each ticker
pub struct RandomActionPolicy {
    rng: Box<dyn RandomSource>,
    low: i64,
    high: i64,
}

impl RandomActionPolicy {
    /// Actions in `0..=2`, matching the placeholder used by the runner
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self::with_range(rng, 0, 2)
    }

    pub fn with_range(rng: Box<dyn RandomSource>, low: i64, high: i64) -> Self {
        Self { rng, low, high }
    }
}

impl ActionPolicy for RandomActionPolicy {
    fn propose(&mut self, tickers: &[Ticker], _observation: &[f64]) -> Vec<i64> {
        tickers
            .iter()
            .map(|_| self.rng.next_in_range(self.low, self.high))
            .collect()
    }

    fn name(&self) -> &str {
        "RandomActionPolicy"
    }
}

/// Always proposes zero for every ticker
#[derive(Debug, Default, Clone, Copy)]
pub struct HoldPolicy;

impl ActionPolicy for HoldPolicy {
    fn propose(&mut self, tickers: &[Ticker], _observation: &[f64]) -> Vec<i64> {
        vec![0; tickers.len()]
    }

    fn name(&self) -> &str {
        "HoldPolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_agents::{ScriptedRandom, StdRandom};

    fn tickers() -> Vec<Ticker> {
        vec!["AAPL".to_string(), "MSFT".to_string(), "TSLA".to_string()]
    }

    #[test]
    fn test_random_policy_one_action_per_ticker_in_range() {
        let mut policy = RandomActionPolicy::new(Box::new(StdRandom::seeded(3)));

        for _ in 0..50 {
            let actions = policy.propose(&tickers(), &[]);
            assert_eq!(actions.len(), 3);
            assert!(actions.iter().all(|a| (0..=2).contains(a)));
        }
    }

    #[test]
    fn test_random_policy_custom_range() {
        // 0.0 -> low, 0.99 -> high over a span of 11
        let rng = ScriptedRandom::new([0.0, 0.99]);
        let mut policy = RandomActionPolicy::with_range(Box::new(rng), -5, 5);

        assert_eq!(policy.propose(&tickers()[..2], &[]), vec![-5, 5]);
    }

    #[test]
    fn test_random_policy_full_i64_range() {
        let rng = ScriptedRandom::new([0.0, 0.5]);
        let mut policy = RandomActionPolicy::with_range(Box::new(rng), i64::MIN, i64::MAX);

        let actions = policy.propose(&tickers()[..2], &[]);
        assert_eq!(actions[0], i64::MIN);
        assert!(actions[1] > i64::MIN && actions[1] < i64::MAX);
    }

    #[test]
    fn test_hold_policy() {
        assert_eq!(HoldPolicy.propose(&tickers(), &[1.0]), vec![0, 0, 0]);
    }
}
