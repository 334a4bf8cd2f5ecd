use serde::{Deserialize, Serialize};

use crate::values::{Cash, Price, Ticker};

/// Direction of a placeholder trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Why an agent wanted to trade but did not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Cash below the per-share price
    InsufficientCash { ticker: Ticker, cash: Cash },
    /// Nothing held to sell
    NoHoldings,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InsufficientCash { ticker, cash } => {
                write!(f, "insufficient cash ({}) to buy {}", cash, ticker)
            }
            SkipReason::NoHoldings => write!(f, "no holdings to sell"),
        }
    }
}

/// Outcome of an agent's reaction to a stimulus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// A trade was executed against the agent's own books
    Trade {
        side: TradeSide,
        ticker: Ticker,
        shares: u64,
        price: Price,
        cash_after: Cash,
    },
    /// The agent chose not to trade
    Hold,
    /// The agent wanted to trade but the trade was infeasible
    Skipped(SkipReason),
    /// The stimulus kind is not one this agent reacts to
    Ignored,
}

impl Decision {
    pub fn is_trade(&self) -> bool {
        matches!(self, Decision::Trade { .. })
    }
}
