use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Cash balance held by an agent
pub type Cash = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol of a tradeable stock
pub type Ticker = String;

/// Environment observation vector, opaque to the simulation core
pub type Observation = Vec<f64>;

/// Auxiliary environment information, opaque to the simulation core
pub type Info = std::collections::BTreeMap<String, serde_json::Value>;
