use agora_core::Ticker;

/// Supplies the environment action when the caller of `step` gives none
pub trait ActionPolicy: Send {
    /// Propose one action entry per ticker
    fn propose(&mut self, tickers: &[Ticker], observation: &[f64]) -> Vec<i64>;

    fn name(&self) -> &str {
        "ActionPolicy"
    }
}
