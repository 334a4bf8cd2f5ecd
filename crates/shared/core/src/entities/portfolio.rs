use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::values::Ticker;

/// Share holdings keyed by ticker
///
/// Counts are always positive: an entry is removed as soon as its count
/// reaches zero, so `shares(t) == 0` and "not held" are the same thing.
/// Iteration is in ticker order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    holdings: BTreeMap<Ticker, u64>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares held for a ticker (0 if not held)
    pub fn shares(&self, ticker: &str) -> u64 {
        self.holdings.get(ticker).copied().unwrap_or(0)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.holdings.contains_key(ticker)
    }

    /// Add shares to a position
    pub fn add(&mut self, ticker: &str, shares: u64) {
        if shares == 0 {
            return;
        }
        *self.holdings.entry(ticker.to_string()).or_insert(0) += shares;
    }

    /// Remove shares from a position
    ///
    /// Returns false (and changes nothing) if fewer than `shares` are held.
    pub fn remove(&mut self, ticker: &str, shares: u64) -> bool {
        let held = self.shares(ticker);
        if shares == 0 || held < shares {
            return false;
        }
        if held == shares {
            self.holdings.remove(ticker);
        } else {
            self.holdings.insert(ticker.to_string(), held - shares);
        }
        true
    }

    /// Held tickers in ticker order
    pub fn tickers(&self) -> Vec<&str> {
        self.holdings.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.holdings.iter().map(|(t, s)| (t.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn total_shares(&self) -> u64 {
        self.holdings.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut portfolio = Portfolio::new();
        portfolio.add("AAPL", 2);
        assert_eq!(portfolio.shares("AAPL"), 2);

        assert!(portfolio.remove("AAPL", 1));
        assert_eq!(portfolio.shares("AAPL"), 1);
    }

    #[test]
    fn test_entry_removed_at_zero() {
        let mut portfolio = Portfolio::new();
        portfolio.add("MSFT", 1);
        assert!(portfolio.remove("MSFT", 1));

        assert!(!portfolio.contains("MSFT"));
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_cannot_oversell() {
        let mut portfolio = Portfolio::new();
        portfolio.add("TSLA", 1);

        assert!(!portfolio.remove("TSLA", 2));
        assert!(!portfolio.remove("GOOGL", 1));
        assert_eq!(portfolio.shares("TSLA"), 1);
    }

    #[test]
    fn test_tickers_are_ordered() {
        let mut portfolio = Portfolio::new();
        portfolio.add("TSLA", 1);
        portfolio.add("AAPL", 3);

        assert_eq!(portfolio.tickers(), vec!["AAPL", "TSLA"]);
        assert_eq!(portfolio.total_shares(), 4);
    }
}
