use serde::{Deserialize, Serialize};

use crate::values::Ticker;

/// Daily close prices for a fixed list of tickers
///
/// Stored day-major: `rows[day][i]` is the close of `tickers[i]` on `day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    tickers: Vec<Ticker>,
    rows: Vec<Vec<f64>>,
}

impl MarketData {
    /// Build from tickers and day-major rows, checking the table's shape
    ///
    /// Returns a description of the first problem found.
    pub fn new(tickers: Vec<Ticker>, rows: Vec<Vec<f64>>) -> Result<Self, String> {
        if tickers.is_empty() {
            return Err("no tickers".to_string());
        }
        if rows.is_empty() {
            return Err("no price rows".to_string());
        }
        for (day, row) in rows.iter().enumerate() {
            if row.len() != tickers.len() {
                return Err(format!(
                    "row {} has {} prices, expected {}",
                    day,
                    row.len(),
                    tickers.len()
                ));
            }
            if let Some(price) = row.iter().find(|p| !p.is_finite() || **p <= 0.0) {
                return Err(format!("row {} has invalid price {}", day, price));
            }
        }
        Ok(Self { tickers, rows })
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn num_tickers(&self) -> usize {
        self.tickers.len()
    }

    pub fn num_days(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Close prices for one day
    pub fn prices(&self, day: usize) -> Option<&[f64]> {
        self.rows.get(day).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tickers() -> Vec<Ticker> {
        vec!["AAPL".to_string(), "MSFT".to_string()]
    }

    #[test]
    fn test_valid_table() {
        let data = MarketData::new(tickers(), vec![vec![100.0, 200.0], vec![101.0, 199.0]]).unwrap();

        assert_eq!(data.num_days(), 2);
        assert_eq!(data.prices(1), Some(&[101.0, 199.0][..]));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(MarketData::new(tickers(), vec![]).is_err());
        assert!(MarketData::new(vec![], vec![vec![1.0]]).is_err());
    }

    #[test]
    fn test_rejects_ragged_or_non_positive_rows() {
        assert!(MarketData::new(tickers(), vec![vec![100.0]]).is_err());
        assert!(MarketData::new(tickers(), vec![vec![100.0, 0.0]]).is_err());
        assert!(MarketData::new(tickers(), vec![vec![100.0, f64::NAN]]).is_err());
    }
}
